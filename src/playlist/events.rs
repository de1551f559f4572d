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

//! Playlist change notifications.
//!
//! Listeners observe every structural change of the playlist through
//! [`PlaylistEvent`]s, emitted synchronously while the mutating call is still
//! running, in the order the changes are applied.

use std::sync::mpsc::Sender;

use crate::{events::AppEvent, model::VideoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlaylistEvent {
    /// Rows `first..=last` were inserted.
    RowsInserted { first: usize, last: usize },

    /// Rows `first..=last` were removed.
    RowsRemoved { first: usize, last: usize },

    /// Rows `first..=last` need to be redrawn.
    DataChanged { first: usize, last: usize },

    /// Every row was replaced, nothing from before is still valid.
    Reset,

    ActiveRowChanged(usize),

    SuggestionsAvailable(Vec<String>),

    /// The given videos moved and should stay selected.
    NeedSelectionFor(Vec<VideoId>),

    RecentKeyword(String),
    RecentChannel(String),
}

impl PlaylistEvent {
    pub(crate) fn inserted(first: usize, last: usize) -> Self {
        Self::RowsInserted { first, last }
    }

    pub(crate) fn removed(first: usize, last: usize) -> Self {
        Self::RowsRemoved { first, last }
    }

    pub(crate) fn changed(first: usize, last: usize) -> Self {
        Self::DataChanged { first, last }
    }
}

pub(crate) trait PlaylistListener {
    fn on_playlist_event(&mut self, event: &PlaylistEvent);
}

/// Forwards playlist changes onto the application event loop.
pub(crate) struct EventForwarder(Sender<AppEvent>);

impl EventForwarder {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self(event_tx)
    }
}

impl PlaylistListener for EventForwarder {
    fn on_playlist_event(&mut self, event: &PlaylistEvent) {
        let _ = self.0.send(AppEvent::Playlist(event.clone()));
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListenerId(pub(super) u64);
