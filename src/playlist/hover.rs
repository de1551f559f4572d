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

//! Row hover and clickable author state.

use crate::{model::Video, playlist::PlaylistModel};

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct HoverState {
    pub(super) hovered_row: Option<usize>,
    pub(super) author_hovered: bool,
    pub(super) author_pressed: bool,
}

impl PlaylistModel {
    pub(crate) fn set_hovered_row(&mut self, row: Option<usize>) {
        let previous = std::mem::replace(&mut self.hover.hovered_row, row);
        if previous == row {
            return;
        }

        if let Some(previous) = previous {
            self.emit_row_changed(previous);
        }
        if let Some(row) = row {
            self.emit_row_changed(row);
        }
    }

    pub(crate) fn clear_hover(&mut self) {
        if let Some(row) = self.hover.hovered_row.take() {
            self.emit_row_changed(row);
        }
    }

    pub(crate) fn hovered_row(&self) -> Option<usize> {
        self.hover.hovered_row
    }

    pub(crate) fn hovered_video(&self) -> Option<&Video> {
        self.hover.hovered_row.and_then(|row| self.video_at(row))
    }

    pub(crate) fn is_hovered(&self, row: usize) -> bool {
        self.hover.hovered_row == Some(row)
    }

    pub(crate) fn author_hovered(&self) -> bool {
        self.hover.author_hovered
    }

    pub(crate) fn author_pressed(&self) -> bool {
        self.hover.author_pressed
    }

    pub(crate) fn enter_author_hover(&mut self) {
        if self.hover.author_hovered {
            return;
        }
        self.hover.author_hovered = true;
        self.update_author();
    }

    pub(crate) fn exit_author_hover(&mut self) {
        if !self.hover.author_hovered {
            return;
        }
        self.hover.author_hovered = false;
        self.update_author();
    }

    pub(crate) fn enter_author_pressed(&mut self) {
        if self.hover.author_pressed {
            return;
        }
        self.hover.author_pressed = true;
        self.update_author();
    }

    pub(crate) fn exit_author_pressed(&mut self) {
        if !self.hover.author_pressed {
            return;
        }
        self.hover.author_pressed = false;
        self.update_author();
    }

    /// Keeps the hover on the same video after rows `first..=last` were
    /// removed, and drops it if that video was one of them.
    pub(super) fn hover_rows_removed(&mut self, first: usize, last: usize) {
        match self.hover.hovered_row {
            Some(row) if row > last => {
                self.hover.hovered_row = Some(row - (last - first + 1));
            }
            Some(row) if row >= first => self.hover = HoverState::default(),
            _ => {}
        }
    }

    /// Keeps the hover on the same video after rows `first..=last` were
    /// inserted.
    pub(super) fn hover_rows_inserted(&mut self, first: usize, last: usize) {
        if let Some(row) = self.hover.hovered_row.filter(|&row| row >= first) {
            self.hover.hovered_row = Some(row + (last - first + 1));
        }
    }

    fn update_author(&mut self) {
        if let Some(row) = self.hover.hovered_row {
            self.emit_row_changed(row);
        }
    }
}
