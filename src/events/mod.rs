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

//! Application events and the main event loop.
//!
//! Everything that happens to the application, key presses, results from the
//! task worker, playlist changes and player updates, arrives on the single
//! [`AppEvent`] channel and is handled here, on the UI thread, one event at a
//! time.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::error;

use handlers::*;
use key_handlers::process_key_event;

use crate::{
    App, MainView, model::SearchParams, player::PlayerState, playlist::PlaylistEvent,
    render::draw, source::SourceEvent,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Catalog(CatalogEvent),

    Source(SourceEvent),
    Playlist(PlaylistEvent),

    SetMainView(MainView),

    Search(SearchParams),
    SearchMore,
    AbortSearch,
    ClearPlaylist,

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    MuteChanged(bool),
    VideoFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

#[derive(Debug)]
pub(crate) enum CatalogEvent {
    Started,
    StartedDirectory(String),
    ProcessedFile(usize, String),
    FinishedDirectory(String),
    Finished(i64),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if drawing fails, if a handler fails, or if a background
/// worker reports a fatal error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,

            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::Catalog(catalog_event) => handle_catalog_event(app, catalog_event),

            AppEvent::Source(source_event) => handle_source_event(app, source_event),
            AppEvent::Playlist(playlist_event) => handle_playlist_event(app, playlist_event)?,

            AppEvent::SetMainView(view) => handle_set_main_view(app, view),

            AppEvent::Search(params) => handle_search(app, params),
            AppEvent::SearchMore => app.playlist.search_more(),
            AppEvent::AbortSearch => app.playlist.abort_search(),
            AppEvent::ClearPlaylist => handle_clear_playlist(app),

            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::TitleChanged(title) => handle_title_changed(app, title),
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
            AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
            AppEvent::MuteChanged(muted) => app.muted = muted,
            AppEvent::VideoFinished => handle_video_finished(app),

            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => {
                error!(%message, "Fatal error");
                return Err(anyhow!(message));
            }

            AppEvent::Tick => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
