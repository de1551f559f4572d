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

//! Playlist view state.
//!
//! The view keeps only presentation state: the cursor, the set of selected
//! videos, the cut videos waiting to be pasted and the last suggestions. The
//! videos themselves are always read from the [`PlaylistModel`].
//!
//! The cursor is kept in step with the model by replaying its row change
//! events, so it stays on the same row content while rows are inserted and
//! removed around it.

mod event;
mod render;

use std::collections::HashSet;

use ratatui::widgets::ListState;

use crate::{
    model::VideoId,
    playlist::{PlaylistEvent, PlaylistModel, VideoTransfer},
};

pub(crate) struct PlaylistView {
    list_state: ListState,
    selection: HashSet<VideoId>,
    clipboard: Option<VideoTransfer>,
    suggestions: Vec<String>,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            list_state: ListState::default(),
            selection: HashSet::new(),
            clipboard: None,
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Everything shown before belongs to a previous search.
    pub(crate) fn reset(&mut self) {
        self.list_state = ListState::default();
        self.selection.clear();
        self.clipboard = None;
        self.suggestions.clear();
    }

    pub(crate) fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }

    /// Shifts the cursor so it stays on the same row content.
    pub(crate) fn apply_row_event(&mut self, event: &PlaylistEvent) {
        let Some(cursor) = self.cursor() else {
            return;
        };

        let cursor = match *event {
            PlaylistEvent::RowsInserted { first, last } if cursor >= first => {
                cursor + (last - first + 1)
            }
            PlaylistEvent::RowsRemoved { first, last } if cursor > last => {
                cursor - (last - first + 1)
            }
            PlaylistEvent::RowsRemoved { first, .. } if cursor >= first => first,
            _ => return,
        };

        self.list_state.select(Some(cursor));
    }

    /// Replaces the selection with `ids` and puts the cursor on the first of
    /// them.
    pub(crate) fn select_videos(&mut self, ids: &[VideoId], playlist: &PlaylistModel) {
        self.selection = ids.iter().copied().collect();
        if let Some(row) = ids.iter().find_map(|&id| playlist.row_for_video(id)) {
            self.list_state.select(Some(row));
        }
    }

    pub(crate) fn is_selected(&self, id: VideoId) -> bool {
        self.selection.contains(&id)
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub(crate) fn clipboard(&self) -> Option<&VideoTransfer> {
        self.clipboard.as_ref()
    }

    /// The videos an action applies to, in row order: the selection if there
    /// is one, otherwise the video under the cursor.
    fn target_rows(&self, playlist: &PlaylistModel) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .selection
            .iter()
            .filter_map(|&id| playlist.row_for_video(id))
            .collect();

        if rows.is_empty() {
            rows.extend(self.cursor().filter(|&row| playlist.row_exists(row)));
        }

        rows.sort_unstable();
        rows
    }

    fn target_ids(&self, playlist: &PlaylistModel) -> Vec<VideoId> {
        self.target_rows(playlist)
            .into_iter()
            .filter_map(|row| playlist.video_at(row))
            .map(|video| video.id)
            .collect()
    }
}
