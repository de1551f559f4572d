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

//! Paginated video sources.
//!
//! A [`VideoSource`] produces videos a page at a time. Loading is
//! asynchronous: the source is asked for a page and later reports each video,
//! then completion or failure, as [`SourceEvent`]s delivered back on the UI
//! thread.
//!
//! Every request is tagged with the [`BindingId`] of the playlist binding that
//! issued it and every event carries it back, so events that belong to a
//! superseded binding can be recognised and dropped.

pub(crate) mod catalog;

use thiserror::Error;

use crate::model::{SearchParams, Video, VideoId};

/// Identifies one binding of a source to a playlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BindingId(u64);

impl BindingId {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A request for one page of videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoadRequest {
    pub(crate) binding: BindingId,
    pub(crate) max: usize,
    pub(crate) skip: usize,
}

#[derive(Debug)]
pub(crate) struct SourceEvent {
    pub(crate) binding: BindingId,
    pub(crate) kind: SourceEventKind,
}

impl SourceEvent {
    pub(crate) fn new(binding: BindingId, kind: SourceEventKind) -> Self {
        Self { binding, kind }
    }
}

#[derive(Debug)]
pub(crate) enum SourceEventKind {
    GotVideo(Video),

    /// The page is complete, `total` is the number of videos the source could
    /// provide for it.
    Finished {
        total: usize,
    },

    Error(String),

    GotThumbnail {
        id: VideoId,
        artwork: bool,
    },
}

/// An abstract paginated provider of videos.
pub(crate) trait VideoSource {
    /// Starts loading up to `request.max` videos from offset `request.skip`.
    ///
    /// Must not block, results are reported later as [`SourceEvent`]s tagged
    /// with `request.binding`.
    fn load_videos(&mut self, request: LoadRequest);

    /// Stops any load in progress, pending results may still be delivered.
    fn abort(&mut self);

    fn load_thumbnail(&mut self, _binding: BindingId, _video: &Video) {}

    /// Related searches discovered by the last completed load.
    fn suggestions(&self) -> Vec<String> {
        Vec::new()
    }

    /// The parameters of the search this source runs, if it is a search.
    fn search_params(&self) -> Option<&SearchParams> {
        None
    }
}

#[derive(Debug, Error)]
pub(crate) enum SourceError {
    #[error("Catalog query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Catalog is not available")]
    WorkerUnavailable,
}
