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

//! Moving videos by cut and paste.
//!
//! A [`VideoTransfer`] carries the identities of the videos being moved, never
//! the videos themselves, which stay owned by the playlist until they are
//! dropped back into it.

use crate::{model::VideoId, playlist::PlaylistModel};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct VideoTransfer {
    ids: Vec<VideoId>,
}

impl VideoTransfer {
    pub(crate) fn ids(&self) -> &[VideoId] {
        &self.ids
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl PlaylistModel {
    /// Only video rows can be picked up, the status row stays put.
    pub(crate) fn is_draggable(&self, row: usize) -> bool {
        self.row_exists(row)
    }

    /// Packs the videos at `rows`, in the given order, for a later drop.
    pub(crate) fn transfer_for_rows(&self, rows: &[usize]) -> VideoTransfer {
        let mut ids = Vec::with_capacity(rows.len());
        for video in rows.iter().filter_map(|&row| self.video_at(row)) {
            if !ids.contains(&video.id) {
                ids.push(video.id);
            }
        }
        VideoTransfer { ids }
    }

    /// Drops a transfer before `row`, or at the end when `row` is `None`.
    ///
    /// Dropping the playlist's own videos moves them. Returns `false` if
    /// nothing in the transfer belongs to this playlist.
    pub(crate) fn drop_transfer(&mut self, transfer: &VideoTransfer, row: Option<usize>) -> bool {
        if transfer.is_empty() {
            return false;
        }
        self.drop_videos(transfer.ids(), row)
    }
}
