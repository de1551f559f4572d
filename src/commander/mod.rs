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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component opened with `:`. It
//! manages a text input, and when a command is submitted parses it and
//! dispatches the corresponding application event or task.
//!
//! # Commands
//!
//! * `q` - quit
//! * `scan` - rebuild the catalog from the configured media directories
//! * `s <keywords>` - search titles and authors
//! * `c <channel>` - list the videos of one author
//! * `more` - load the next page of the current search
//! * `abort` - stop the current search and clear the playlist
//! * `clear` - remove every video from the playlist
//! * `recent`, `2` - show recent searches
//! * `1` - show the playlist

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use thiserror::Error;
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent, model::SearchParams, tasks::AppTask};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for command: {0}")]
    MissingArgument(&'static str),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Scan,
    Search(SearchParams),
    More,
    Abort,
    Clear,
    View(MainView),
}

fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] => Command::Quit,

        ["scan"] => Command::Scan,

        ["s"] => return Err(CommandError::MissingArgument("s")),
        ["s", keywords @ ..] => Command::Search(SearchParams::for_keywords(keywords.join(" "))),

        ["c"] => return Err(CommandError::MissingArgument("c")),
        ["c", channel @ ..] => Command::Search(SearchParams::for_channel(channel.join(" "))),

        ["more"] => Command::More,
        ["abort"] => Command::Abort,
        ["clear"] => Command::Clear,

        ["1"] => Command::View(MainView::Playlist),
        ["2"] | ["recent"] => Command::View(MainView::Recent),

        _ => return Err(CommandError::Unknown(buffer.to_string())),
    };

    Ok(command)
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,

    /// The outcome of the last command, shown until the next one starts.
    message: Option<String>,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            message: None,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles a key press, returning `true` if the command line used it.
    pub(crate) fn handle_event(
        &mut self,
        key: &KeyEvent,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        if !self.active {
            if key.code == KeyCode::Char(':') {
                self.active = true;
                self.message = None;
                return Ok(true);
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    self.run_command(&buffer, task_tx, event_tx)?;
                }
            }

            _ => {
                self.input.handle_event(&Event::Key(*key));
            }
        }

        Ok(true)
    }

    fn run_command(
        &mut self,
        buffer: &str,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let command = match parse_command(buffer) {
            Ok(command) => command,
            Err(e) => {
                debug!(%buffer, error = %e, "Rejected command");
                self.message = Some(e.to_string());
                return Ok(());
            }
        };

        match command {
            Command::Quit => event_tx.send(AppEvent::ExitApplication)?,
            Command::Scan => task_tx.send(AppTask::ScanCatalog)?,
            Command::Search(params) => event_tx.send(AppEvent::Search(params))?,
            Command::More => event_tx.send(AppEvent::SearchMore)?,
            Command::Abort => event_tx.send(AppEvent::AbortSearch)?,
            Command::Clear => event_tx.send(AppEvent::ClearPlaylist)?,
            Command::View(view) => event_tx.send(AppEvent::SetMainView(view))?,
        }

        Ok(())
    }
}
