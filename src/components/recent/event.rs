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

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::{components::RecentView, events::AppEvent};

impl RecentView {
    /// Handles a key press, returning `true` if the view used it.
    pub(crate) fn process_event(&mut self, key: &KeyEvent, event_tx: &Sender<AppEvent>) -> Result<bool> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = self.cursor().map_or(0, |row| row + 1);
                self.goto_row(next);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let previous = self.cursor().map_or(0, |row| row.saturating_sub(1));
                self.goto_row(previous);
            }
            KeyCode::Char('g') | KeyCode::Home => self.goto_row(0),
            KeyCode::Char('G') | KeyCode::End => self.goto_row(usize::MAX),

            KeyCode::Enter => {
                if let Some(entry) = self.current() {
                    event_tx.send(AppEvent::Search(entry.search_params()))?;
                }
            }

            _ => return Ok(false),
        }

        Ok(true)
    }

    fn goto_row(&mut self, row: usize) {
        if let Some(last) = self.entries.len().checked_sub(1) {
            self.list_state.select(Some(row.min(last)));
        }
    }
}
