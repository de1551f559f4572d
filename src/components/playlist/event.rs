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

//! Input handling for the playlist view.
//!
//! Maps keyboard events to cursor movement, selection, and the playlist
//! operations they stand for. Moving the cursor hovers the row under it, and
//! `Tab` moves the focus between a row's title and its clickable author.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{
    components::PlaylistView,
    events::AppEvent,
    model::SearchParams,
    playlist::{MoveDirection, PlaylistModel, RowKind},
};

impl PlaylistView {
    /// Handles a key press, returning `true` if the view used it.
    pub(crate) fn process_event(
        &mut self,
        key: &KeyEvent,
        playlist: &mut PlaylistModel,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(playlist),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(playlist),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_row(playlist, 0),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                let last = playlist.row_count().saturating_sub(1);
                self.goto_row(playlist, last);
            }

            (KeyCode::Enter, _) => self.activate_current(playlist, event_tx)?,

            (KeyCode::Tab, _) => {
                if playlist.author_hovered() {
                    playlist.exit_author_hover();
                } else if playlist.hovered_video().is_some() {
                    playlist.enter_author_hover();
                }
            }

            (KeyCode::Esc, _) => {
                playlist.exit_author_hover();
                self.selection.clear();
            }

            (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.selection
                    .extend(playlist.videos().iter().map(|video| video.id));
            }
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => self.selection.clear(),

            (KeyCode::Char('v'), _) => {
                self.toggle_select_current(playlist);
                self.goto_next(playlist);
            }

            (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => {
                let ids = self.target_ids(playlist);
                self.selection.clear();
                playlist.remove_videos(&ids);
            }

            (KeyCode::Char('K'), _) => {
                let ids = self.target_ids(playlist);
                playlist.move_videos(&ids, MoveDirection::Up);
            }
            (KeyCode::Char('J'), _) => {
                let ids = self.target_ids(playlist);
                playlist.move_videos(&ids, MoveDirection::Down);
            }

            (KeyCode::Char('x'), _) => {
                let rows: Vec<usize> = self
                    .target_rows(playlist)
                    .into_iter()
                    .filter(|&row| playlist.is_draggable(row))
                    .collect();
                let transfer = playlist.transfer_for_rows(&rows);
                debug!(count = transfer.len(), "Cut videos");
                self.clipboard = (!transfer.is_empty()).then_some(transfer);
            }

            (KeyCode::Char('p'), _) => {
                if let Some(transfer) = self.clipboard.take() {
                    playlist.drop_transfer(&transfer, self.cursor());
                }
            }

            (KeyCode::Char('a'), _) => playlist.abort_search(),

            _ => return Ok(false),
        }

        Ok(true)
    }

    /// Enter plays a video, follows its author when the author has the focus,
    /// or asks for more videos on the status row.
    fn activate_current(
        &mut self,
        playlist: &mut PlaylistModel,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let Some(row) = self.cursor() else {
            return Ok(());
        };

        match playlist.row_kind(row) {
            Some(RowKind::Video) if playlist.author_hovered() => {
                let Some(author) = playlist.video_at(row).map(|video| video.author.clone())
                else {
                    return Ok(());
                };

                playlist.enter_author_pressed();
                playlist.exit_author_pressed();
                event_tx.send(AppEvent::Search(SearchParams::for_channel(author)))?;
            }

            Some(RowKind::Video) => playlist.set_active_row(row),

            Some(RowKind::Status) => {
                if playlist.can_search_more() || playlist.status_is_error() {
                    playlist.search_more();
                }
            }

            None => {}
        }

        Ok(())
    }

    fn goto_row(&mut self, playlist: &mut PlaylistModel, row: usize) {
        let row_count = playlist.row_count();
        if row_count == 0 {
            return;
        }
        let row = row.min(row_count - 1);
        self.list_state.select(Some(row));
        playlist.set_hovered_row(Some(row));
    }

    fn goto_next(&mut self, playlist: &mut PlaylistModel) {
        let next = self.cursor().map_or(0, |row| row + 1);
        self.goto_row(playlist, next);
    }

    fn goto_previous(&mut self, playlist: &mut PlaylistModel) {
        let previous = self.cursor().map_or(0, |row| row.saturating_sub(1));
        self.goto_row(playlist, previous);
    }

    fn toggle_select_current(&mut self, playlist: &PlaylistModel) {
        let Some(video) = self.cursor().and_then(|row| playlist.video_at(row)) else {
            return;
        };
        if !self.selection.insert(video.id) {
            self.selection.remove(&video.id);
        }
    }
}
