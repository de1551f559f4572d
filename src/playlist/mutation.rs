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

//! Removing and reordering videos.
//!
//! Every mutation recomputes the active row before it notifies listeners, and
//! videos that are deleted are only dropped once all notifications for them
//! have been sent.

use tracing::debug;

use crate::{
    model::{Video, VideoId},
    playlist::{PlaylistEvent, PlaylistModel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveDirection {
    Up,
    Down,
}

impl PlaylistModel {
    /// Detaches `count` videos starting at `position` and hands them to the
    /// caller.
    ///
    /// The range is clamped to the list. The active video keeps its identity
    /// while detached, inserting it again restores it.
    pub(crate) fn remove_range(&mut self, position: usize, count: usize) -> Vec<Video> {
        let len = self.videos.len();
        if position >= len || count == 0 {
            return Vec::new();
        }

        let end = position.saturating_add(count).min(len);
        let was_visible = self.status_row_visible();

        let removed: Vec<Video> = self.videos.drain(position..end).collect();
        self.reconcile_active_row();
        self.hover_rows_removed(position, end - 1);

        self.emit(PlaylistEvent::removed(position, end - 1));
        self.update_status_row(was_visible);

        removed
    }

    /// Inserts a video before `row`, clamped to the end of the list, and
    /// returns the row it ended up at.
    pub(crate) fn insert_video(&mut self, row: usize, video: Video) -> usize {
        let row = row.min(self.videos.len());
        let was_visible = self.status_row_visible();

        self.videos.insert(row, video);
        self.reconcile_active_row();
        self.hover_rows_inserted(row, row);

        self.emit(PlaylistEvent::inserted(row, row));
        self.update_status_row(was_visible);

        row
    }

    /// Deletes the given videos, ignoring any that are not in the list.
    pub(crate) fn remove_videos(&mut self, ids: &[VideoId]) {
        let mut removed = Vec::new();

        for &id in ids {
            let Some(row) = self.row_for_video(id) else {
                continue;
            };

            let was_visible = self.status_row_visible();

            removed.push(self.videos.remove(row));
            if self.active_video == Some(id) {
                self.active_video = None;
            }
            self.reconcile_active_row();
            self.hover_rows_removed(row, row);

            self.emit(PlaylistEvent::removed(row, row));
            self.update_status_row(was_visible);
        }

        if !removed.is_empty() {
            debug!(count = removed.len(), "Removed videos");
        }

        drop(removed);
    }

    /// Deletes the videos at `rows`, rows are resolved before anything is
    /// removed.
    pub(crate) fn remove_rows(&mut self, rows: &[usize]) {
        let ids: Vec<VideoId> = rows
            .iter()
            .filter_map(|&row| self.video_at(row))
            .map(|video| video.id)
            .collect();
        self.remove_videos(&ids);
    }

    /// Moves each of the given videos one row up or down.
    ///
    /// A video already at the edge stays where it is, and so does any moved
    /// video directly behind it, so a block of videos keeps its shape.
    pub(crate) fn move_videos(&mut self, ids: &[VideoId], direction: MoveDirection) {
        let mut moving: Vec<(usize, VideoId)> = ids
            .iter()
            .filter_map(|&id| self.row_for_video(id).map(|row| (row, id)))
            .collect();

        if moving.is_empty() {
            return;
        }

        // Videos nearest the edge they move towards go first
        moving.sort_unstable();
        moving.dedup();
        if direction == MoveDirection::Down {
            moving.reverse();
        }

        let mut end = match direction {
            MoveDirection::Up => -1,
            MoveDirection::Down => self.videos.len() as isize,
        };

        for &(_, id) in &moving {
            let Some(row) = self.row_for_video(id) else {
                continue;
            };

            let target = match direction {
                MoveDirection::Up => row as isize - 1,
                MoveDirection::Down => row as isize + 1,
            };

            if target == end {
                end = row as isize;
                continue;
            }

            if let Some(video) = self.remove_range(row, 1).pop() {
                self.insert_video(target as usize, video);
            }
        }

        self.reconcile_active_row();

        let moved: Vec<VideoId> = ids
            .iter()
            .copied()
            .filter(|id| moving.iter().any(|(_, moving_id)| moving_id == id))
            .collect();
        self.emit(PlaylistEvent::NeedSelectionFor(moved));
    }

    /// Moves the given videos so they appear, in the given order, before
    /// `row`, or at the end when `row` is `None`.
    ///
    /// `row` names the video the drop lands in front of, counted before any
    /// video is taken out. When videos come from above it the block ends up
    /// starting at a lower row number: dropping rows 0 and 1 of
    /// `[a, b, c, d, e]` at row 4 gives `[c, d, a, b, e]`.
    ///
    /// Returns `false` if none of the videos are in the list.
    pub(crate) fn drop_videos(&mut self, ids: &[VideoId], row: Option<usize>) -> bool {
        let len = self.videos.len();
        let mut target = row.unwrap_or(len).min(len);
        let mut dropped: Vec<VideoId> = Vec::with_capacity(ids.len());

        for &id in ids {
            if dropped.contains(&id) {
                continue;
            }

            let Some(current) = self.row_for_video(id) else {
                debug!(?id, "Ignoring drop of unknown video");
                continue;
            };

            let Some(video) = self.remove_range(current, 1).pop() else {
                continue;
            };

            if current < target {
                target -= 1;
            }

            target = self.insert_video(target, video) + 1;
            dropped.push(id);
        }

        self.reconcile_active_row();

        if dropped.is_empty() {
            return false;
        }

        self.emit(PlaylistEvent::NeedSelectionFor(dropped));
        true
    }
}
