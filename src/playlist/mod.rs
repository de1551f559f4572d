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

//! Playlist state and incremental loading.
//!
//! The [`PlaylistModel`] owns the ordered list of videos found by the bound
//! [`VideoSource`], the active (playing) video, and the state of the paged
//! search that fills it.
//!
//! # Pagination
//!
//! Pages are requested with [`PlaylistModel::search_more`]. At most one page
//! is in flight at a time, a request made while one is pending is ignored. The
//! offset of the next page is advanced as soon as a page is requested, so a
//! later request always continues after it.
//!
//! # Status row
//!
//! After the last video the model exposes a synthetic status row that shows
//! search progress, errors, or how to load more. It is hidden while a page is
//! loading into a non-empty list.
//!
//! # Notifications
//!
//! Every change is reported to the subscribed [`PlaylistListener`]s before the
//! call that made it returns. Row numbers in an event always describe the list
//! as it is at the moment the event is emitted.

mod events;
mod hover;
mod mutation;
mod transfer;

#[cfg(test)]
mod tests;

use tracing::{debug, info, warn};

pub(crate) use events::{EventForwarder, ListenerId, PlaylistEvent, PlaylistListener};
use hover::HoverState;
pub(crate) use mutation::MoveDirection;
pub(crate) use transfer::VideoTransfer;

use crate::{
    config::PlaylistSettings,
    model::{SearchParams, Thumbnail, Video, VideoId},
    source::{BindingId, LoadRequest, SourceEvent, SourceEventKind, VideoSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowKind {
    Video,
    Status,
}

pub(crate) struct PlaylistModel {
    settings: PlaylistSettings,

    videos: Vec<Video>,

    source: Option<Box<dyn VideoSource>>,
    search_params: Option<SearchParams>,
    binding: BindingId,

    searching: bool,
    can_search_more: bool,
    error_message: Option<String>,
    skip: usize,
    max: usize,
    first_video_added: bool,

    active_video: Option<VideoId>,
    active_row: Option<usize>,

    hover: HoverState,

    listeners: Vec<(ListenerId, Box<dyn PlaylistListener>)>,
    next_listener_id: u64,
}

impl PlaylistModel {
    pub(crate) fn new(settings: PlaylistSettings) -> Self {
        Self {
            settings,
            videos: Vec::new(),
            source: None,
            search_params: None,
            binding: BindingId::default(),
            searching: false,
            can_search_more: true,
            error_message: None,
            skip: 0,
            max: 0,
            first_video_added: false,
            active_video: None,
            active_row: None,
            hover: HoverState::default(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub(crate) fn subscribe(&mut self, listener: Box<dyn PlaylistListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    // --- Source binding and pagination

    /// Binds a new source, discarding everything from the previous one, and
    /// requests the first page.
    pub(crate) fn set_video_source(&mut self, source: Box<dyn VideoSource>) {
        if let Some(mut previous) = self.source.take() {
            previous.abort();
        }

        self.binding = self.binding.next();

        self.videos.clear();
        self.active_video = None;
        self.active_row = None;
        self.hover = HoverState::default();

        self.searching = false;
        self.can_search_more = true;
        self.error_message = None;
        self.skip = 0;
        self.max = 0;
        self.first_video_added = false;

        self.search_params = source.search_params().cloned();
        self.source = Some(source);

        info!(params = ?self.search_params, "Bound new video source");

        self.emit(PlaylistEvent::Reset);

        self.search_more();
    }

    pub(crate) fn search_more(&mut self) {
        self.search_more_by(self.settings.page_size);
    }

    /// Requests the next `max` videos from the source.
    ///
    /// Ignored while a request is already in flight.
    pub(crate) fn search_more_by(&mut self, max: usize) {
        if self.searching {
            debug!("Search already in progress, ignoring request");
            return;
        }

        if self.source.is_none() || max == 0 {
            debug!(max, "Nothing to search");
            return;
        }

        let was_visible = self.status_row_visible();

        self.searching = true;
        self.max = max;
        self.error_message = None;

        let request = LoadRequest {
            binding: self.binding,
            max,
            skip: self.skip,
        };

        if let Some(source) = self.source.as_mut() {
            source.load_videos(request);
        }

        self.skip += max;

        debug!(max, skip = request.skip, "Requested videos");

        self.update_status_row(was_visible);
        self.emit_status_changed();
    }

    /// Keeps a page worth of videos queued after the active one.
    pub(crate) fn search_needed(&mut self) {
        let active_row = self.active_row.map_or(-1, |row| row as isize);
        let remaining_rows = self.videos.len() as isize - active_row;
        let rows_needed = self.settings.page_size as isize - remaining_rows;
        if rows_needed > 0 {
            self.search_more_by(rows_needed as usize);
        }
    }

    /// Drops every video, stops the source and ignores anything still on its
    /// way from it.
    pub(crate) fn abort_search(&mut self) {
        let was_visible = self.status_row_visible();

        let removed = std::mem::take(&mut self.videos);
        self.active_video = None;
        self.active_row = None;
        self.hover.hovered_row = None;

        if !removed.is_empty() {
            self.emit(PlaylistEvent::removed(0, removed.len() - 1));
        }

        self.binding = self.binding.next();
        if let Some(source) = self.source.as_mut() {
            source.abort();
        }

        self.searching = false;
        self.first_video_added = false;

        self.update_status_row(was_visible);
        self.emit_status_changed();

        if !removed.is_empty() {
            debug!(count = removed.len(), "Aborted search, dropped videos");
        }
    }

    /// Applies an event reported by a source.
    ///
    /// Events from any binding other than the current one are stale and
    /// ignored.
    pub(crate) fn handle_source_event(&mut self, event: SourceEvent) {
        if event.binding != self.binding {
            debug!(binding = ?event.binding, current = ?self.binding, "Ignoring stale source event");
            return;
        }

        match event.kind {
            SourceEventKind::GotVideo(video) => self.add_video(video),
            SourceEventKind::Finished { total } => self.search_finished(total),
            SourceEventKind::Error(message) => self.search_error(message),
            SourceEventKind::GotThumbnail { id, artwork } => self.update_thumbnail(id, artwork),
        }
    }

    pub(crate) fn add_video(&mut self, mut video: Video) {
        if self.row_for_video(video.id).is_some() {
            debug!(id = ?video.id, "Ignoring duplicate video");
            return;
        }

        if video.load_thumbnail() {
            if let Some(source) = self.source.as_mut() {
                source.load_thumbnail(self.binding, &video);
            }
        }

        let was_visible = self.status_row_visible();

        let row = self.videos.len();
        self.videos.push(video);
        self.hover_rows_inserted(row, row);
        self.emit(PlaylistEvent::inserted(row, row));

        self.update_status_row(was_visible);

        if !self.first_video_added {
            self.first_video_added = true;

            if !self.settings.manual_play {
                self.set_active_row(0);
            }

            self.remember_search();
        }
    }

    pub(crate) fn search_finished(&mut self, total: usize) {
        let was_visible = self.status_row_visible();

        self.searching = false;
        self.can_search_more = total >= self.max;

        debug!(total, max = self.max, "Search finished");

        self.update_status_row(was_visible);
        self.emit_status_changed();

        let suggestions = self
            .source
            .as_ref()
            .map(|source| source.suggestions())
            .unwrap_or_default();

        if !suggestions.is_empty() {
            self.emit(PlaylistEvent::SuggestionsAvailable(suggestions));
        }
    }

    pub(crate) fn search_error(&mut self, message: String) {
        warn!(%message, "Search failed");

        let was_visible = self.status_row_visible();

        self.searching = false;
        self.error_message = Some(message);

        self.update_status_row(was_visible);
        self.emit_status_changed();
    }

    fn update_thumbnail(&mut self, id: VideoId, artwork: bool) {
        if let Some(row) = self.row_for_video(id) {
            self.videos[row].thumbnail = Thumbnail::Loaded { artwork };
            self.emit(PlaylistEvent::changed(row, row));
        }
    }

    /// Reports the search of a source binding's first video as recently used.
    fn remember_search(&mut self) {
        let Some(params) = self.search_params.as_ref() else {
            return;
        };

        if params.transient {
            return;
        }

        let Some(video) = self.videos.first() else {
            return;
        };

        let mut remembered = Vec::new();

        if !params.keywords.is_empty() {
            let keyword = if params.is_url() {
                // An address means nothing on its own, keep the title with it
                format!("{}|{}", params.keywords, video.title)
            } else {
                params.keywords.clone()
            };
            remembered.push(PlaylistEvent::RecentKeyword(keyword));
        }

        if !params.author.is_empty() {
            let channel = match video.author_uri.as_deref() {
                Some(uri) if !uri.is_empty() => format!("{}|{}", uri, video.author),
                _ => params.author.clone(),
            };
            remembered.push(PlaylistEvent::RecentChannel(channel));
        }

        for event in remembered {
            self.emit(event);
        }
    }

    // --- Active video

    /// Makes the video at `row` the active one, or clears the active video if
    /// there is no such row.
    pub(crate) fn set_active_row(&mut self, row: usize) {
        let previous = self.active_row;

        if !self.row_exists(row) {
            self.active_video = None;
            self.active_row = None;
            if let Some(previous) = previous {
                self.emit_row_changed(previous);
            }
            return;
        }

        self.active_row = Some(row);
        self.active_video = Some(self.videos[row].id);

        if let Some(previous) = previous.filter(|&previous| previous != row) {
            self.emit_row_changed(previous);
        }

        self.emit(PlaylistEvent::changed(row, row));
        self.emit(PlaylistEvent::ActiveRowChanged(row));
    }

    pub(crate) fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    pub(crate) fn active_video(&self) -> Option<&Video> {
        self.active_row.and_then(|row| self.videos.get(row))
    }

    pub(crate) fn is_active(&self, row: usize) -> bool {
        self.active_row == Some(row)
    }

    pub(crate) fn next_row(&self) -> Option<usize> {
        let next = self.active_row.map_or(0, |row| row + 1);
        self.row_exists(next).then_some(next)
    }

    pub(crate) fn previous_row(&self) -> Option<usize> {
        let previous = self.active_row?.checked_sub(1)?;
        self.row_exists(previous).then_some(previous)
    }

    /// Recomputes the active row from the active video's current position.
    fn reconcile_active_row(&mut self) {
        self.active_row = self.active_video.and_then(|id| self.row_for_video(id));
    }

    // --- Queries

    pub(crate) fn row_count(&self) -> usize {
        self.videos.len() + usize::from(self.status_row_visible())
    }

    pub(crate) fn len(&self) -> usize {
        self.videos.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub(crate) fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub(crate) fn row_exists(&self, row: usize) -> bool {
        row < self.videos.len()
    }

    pub(crate) fn row_kind(&self, row: usize) -> Option<RowKind> {
        if self.row_exists(row) {
            Some(RowKind::Video)
        } else if row == self.videos.len() {
            Some(RowKind::Status)
        } else {
            None
        }
    }

    pub(crate) fn video_at(&self, row: usize) -> Option<&Video> {
        self.videos.get(row)
    }

    pub(crate) fn row_for_video(&self, id: VideoId) -> Option<usize> {
        self.videos.iter().position(|video| video.id == id)
    }

    pub(crate) fn display_text(&self, row: usize) -> Option<String> {
        match self.row_kind(row)? {
            RowKind::Video => self.videos.get(row).map(|video| video.title.clone()),
            RowKind::Status => Some(self.status_text()),
        }
    }

    pub(crate) fn status_text(&self) -> String {
        if let Some(message) = self.error_message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }

        if self.searching {
            "Searching...".to_string()
        } else if self.can_search_more {
            format!("Show {} More", self.settings.page_size)
        } else if self.videos.is_empty() {
            "No videos".to_string()
        } else {
            "No more videos".to_string()
        }
    }

    pub(crate) fn status_is_error(&self) -> bool {
        self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub(crate) fn status_row_visible(&self) -> bool {
        self.videos.is_empty() || !self.searching
    }

    pub(crate) fn is_searching(&self) -> bool {
        self.searching
    }

    pub(crate) fn can_search_more(&self) -> bool {
        self.can_search_more
    }

    pub(crate) fn search_params(&self) -> Option<&SearchParams> {
        self.search_params.as_ref()
    }

    // --- Notifications

    fn emit(&mut self, event: PlaylistEvent) {
        for (_, listener) in &mut self.listeners {
            listener.on_playlist_event(&event);
        }
    }

    fn emit_row_changed(&mut self, row: usize) {
        if row < self.row_count() {
            self.emit(PlaylistEvent::changed(row, row));
        }
    }

    fn emit_status_changed(&mut self) {
        if self.status_row_visible() {
            let row = self.videos.len();
            self.emit(PlaylistEvent::changed(row, row));
        }
    }

    /// Reports the status row appearing or disappearing since `was_visible`
    /// was sampled, so listeners always agree with [`Self::row_count`].
    fn update_status_row(&mut self, was_visible: bool) {
        let row = self.videos.len();
        match (was_visible, self.status_row_visible()) {
            (false, true) => self.emit(PlaylistEvent::inserted(row, row)),
            (true, false) => self.emit(PlaylistEvent::removed(row, row)),
            _ => {}
        }
    }
}
