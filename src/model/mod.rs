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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the videos
//! found in the catalog and the parameters of a search, independent of how
//! they are stored or presented.

use xxhash_rust::xxh3::xxh3_64;

/// Durable identity of a video.
///
/// Derived from the video's file path so the same file keeps the same id
/// across catalog rescans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct VideoId(pub(crate) i64);

impl VideoId {
    pub(crate) fn for_path(path: &str) -> Self {
        // Stored as a signed SQLite integer, the bit pattern is what matters
        Self(xxh3_64(path.as_bytes()) as i64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Thumbnail {
    #[default]
    NotLoaded,
    Loading,
    Loaded {
        artwork: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Video {
    pub(crate) id: VideoId,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) author_uri: Option<String>,
    pub(crate) duration: i64,
    pub(crate) filename: String,
    pub(crate) thumbnail: Thumbnail,
}

impl Video {
    pub(crate) fn new(filename: String, title: String, author: String) -> Self {
        Self {
            id: VideoId::for_path(&filename),
            title,
            author,
            author_uri: None,
            duration: 0,
            filename,
            thumbnail: Thumbnail::NotLoaded,
        }
    }

    /// Marks the thumbnail as loading.
    ///
    /// Returns `true` if a load should actually be started, a thumbnail that
    /// is already loading or loaded is never requested twice.
    pub(crate) fn load_thumbnail(&mut self) -> bool {
        if self.thumbnail == Thumbnail::NotLoaded {
            self.thumbnail = Thumbnail::Loading;
            true
        } else {
            false
        }
    }

    pub(crate) fn thumbnail_loaded(&self) -> bool {
        matches!(self.thumbnail, Thumbnail::Loaded { .. })
    }
}

/// Parameters of a catalog search.
///
/// A transient search is one the user did not type, for example a related
/// search started by the application, and is never remembered.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct SearchParams {
    pub(crate) keywords: String,
    pub(crate) author: String,
    pub(crate) transient: bool,
}

impl SearchParams {
    pub(crate) fn for_keywords(keywords: String) -> Self {
        Self {
            keywords,
            ..Self::default()
        }
    }

    pub(crate) fn for_channel(author: String) -> Self {
        Self {
            author,
            ..Self::default()
        }
    }

    pub(crate) fn is_url(&self) -> bool {
        self.keywords.starts_with("http://") || self.keywords.starts_with("https://")
    }
}
