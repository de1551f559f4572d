// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Video Player TUI.
//!
//! A terminal front end for browsing a local video catalog and playing it as
//! an endless playlist.
//!
//! The playlist fills itself from catalog searches one page at a time: a page
//! is fetched when the user asks for more, and again whenever playback gets
//! to the last video, so there is always something queued to play next.
//!
//! ## Architecture
//!
//! * The **main thread** owns all application state, handles events and draws
//!   the UI.
//! * The **task worker** runs catalog scans and queries against the database.
//! * The **player worker** owns the MPV context.
//! * **Input and tick threads** feed key presses and a periodic redraw into
//!   the event loop.
//!
//! Everything reaches the main thread as an [`AppEvent`] over a single
//! `std::sync::mpsc` channel. The terminal is always restored on the way out,
//! even when the event loop fails.

mod commander;
mod components;
mod config;
mod db;
mod events;
mod model;
mod player;
mod playlist;
mod render;
mod source;
mod tasks;
mod theme;
mod util;

use std::{
    fs::File,
    io,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    commander::Commander,
    components::{PlaylistView, RecentView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{SearchParams, Video},
    player::{PlayerState, VideoPlayer},
    playlist::{EventForwarder, PlaylistModel},
    source::catalog::CatalogSearch,
    tasks::AppTask,
    theme::Theme,
};

const LOG_ENV_VAR: &str = "CHOOTUBE_LOG";
const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainView {
    Playlist,
    Recent,
}

/// Application state.
struct App {
    config: AppConfig,

    theme: Theme,
    main_view: MainView,

    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,

    task_tx: Sender<AppTask>,

    player: VideoPlayer,

    playlist: PlaylistModel,

    playlist_view: PlaylistView,
    recent_view: RecentView,

    commander: Commander,
    status_message: Option<String>,

    player_state: PlayerState,
    now_playing: Option<Video>,
    player_title: Option<String>,
    player_duration: Option<u64>,
    player_time: Option<u64>,
    player_position: Option<f64>,
    volume: Option<u32>,
    muted: bool,
}

impl App {
    fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut playlist = PlaylistModel::new(config.playlist_settings());
        playlist.subscribe(Box::new(EventForwarder::new(event_tx.clone())));

        let mut recent_view = RecentView::new();
        recent_view.refresh(&config);

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Playlist,
            player: VideoPlayer::new(event_tx.clone()),
            event_tx,
            event_rx,
            task_tx,
            playlist,
            playlist_view: PlaylistView::new(),
            recent_view,
            commander: Commander::new(),
            status_message: None,
            player_state: PlayerState::Stopped,
            now_playing: None,
            player_title: None,
            player_duration: None,
            player_time: None,
            player_position: None,
            volume: None,
            muted: false,
        }
    }

    /// Points the playlist at a new catalog search, replacing its contents.
    fn bind_search(&mut self, params: SearchParams) {
        info!(keywords = %params.keywords, author = %params.author, "New search");
        let source = CatalogSearch::new(params, self.task_tx.clone(), self.event_tx.clone());
        self.playlist.set_video_source(Box::new(source));
    }

    /// The whole catalog, used at startup and never remembered as a recent
    /// search.
    fn browse_all() -> SearchParams {
        SearchParams {
            transient: true,
            ..SearchParams::default()
        }
    }
}

fn main() -> Result<()> {
    let config = config::load_config();

    init_logging();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Logs go to a file next to the configuration, the terminal belongs to the
/// UI. Without a usable log file the application runs without logging.
fn init_logging() {
    let Some(path) = config::log_file_path() else {
        return;
    };

    let Ok(file) = File::create(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let res = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if res.is_ok() {
        info!(path = %path.display(), "Logging started");
    }
}

fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Match the emulator background to the theme, otherwise a thin outline of
    // the default background shows around the UI
    if let Some(hex) = Theme::to_hex(app.theme.background_colour)
        && let Err(e) = util::term::set_terminal_bg(&hex)
    {
        warn!(error = %e, "Failed to set terminal background");
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Best effort, this also runs after the event loop failed.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the background threads, runs the first search and then hands over
/// to the event loop until the user quits.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to read terminal input");
                    break;
                }
            }
        }
    });

    // The tick is the minimum redraw rate, it keeps the playback time moving
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    app.bind_search(App::browse_all());

    process_events(terminal, app)
}
