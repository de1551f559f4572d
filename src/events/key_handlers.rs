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

//! Keyboard input routing.
//!
//! A key goes to the command line first, then to the active view, and only if
//! neither of those used it is it treated as a global key.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::{App, MainView, events::AppEvent};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 20;

/// Maps keyboard input to application actions and playback commands.
///
/// # Errors
///
/// Returns an error if a command fails to send to a background worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app
        .commander
        .handle_event(&key, &app.task_tx, &app.event_tx)?
    {
        return Ok(());
    }

    let handled = match app.main_view {
        MainView::Playlist => {
            app.playlist_view
                .process_event(&key, &mut app.playlist, &app.event_tx)?
        }
        MainView::Recent => app.recent_view.process_event(&key, &app.event_tx)?,
    };

    if !handled {
        process_global_key_event(app, key)?;
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('1'), _) => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Playlist))?,
        (KeyCode::Char('2'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Recent))?,

        // Playlist navigation
        (KeyCode::Char('n'), _) => {
            if let Some(row) = app.playlist.next_row() {
                app.playlist.set_active_row(row);
            }
            app.playlist.search_needed();
        }
        (KeyCode::Char('b'), _) => {
            if let Some(row) = app.playlist.previous_row() {
                app.playlist.set_active_row(row);
            }
        }

        (KeyCode::Char(','), _) => app.player.seek(-FINE_SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.player.seek(FINE_SEEK_DELTA)?,
        (KeyCode::Char('<'), _) => app.player.seek(-SEEK_DELTA)?,
        (KeyCode::Char('>'), _) => app.player.seek(SEEK_DELTA)?,
        (KeyCode::Char(' '), _) => app.player.toggle_pause()?,
        (KeyCode::Char('s'), _) => app.player.stop()?,
        (KeyCode::Char('-'), _) => app.player.adjust_volume(-FINE_VOLUME_DELTA)?,
        (KeyCode::Char('='), _) => app.player.adjust_volume(FINE_VOLUME_DELTA)?,
        (KeyCode::Char('_'), _) => app.player.adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('+'), _) => app.player.adjust_volume(VOLUME_DELTA)?,
        (KeyCode::Char('m'), _) => app.player.toggle_mute()?,

        _ => {}
    }

    Ok(())
}
