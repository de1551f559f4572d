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

//! Tests for the playlist model

use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    config::PlaylistSettings,
    model::{SearchParams, Video, VideoId},
    source::{BindingId, LoadRequest, SourceEvent, SourceEventKind, VideoSource},
};

// ==================== Test doubles ====================

#[derive(Debug, Default)]
struct SourceLog {
    requests: Vec<LoadRequest>,
    aborts: usize,
    thumbnails: Vec<VideoId>,
}

struct FakeSource {
    log: Rc<RefCell<SourceLog>>,
    params: Option<SearchParams>,
    suggestions: Vec<String>,
}

impl FakeSource {
    fn new(log: &Rc<RefCell<SourceLog>>) -> Self {
        Self {
            log: Rc::clone(log),
            params: None,
            suggestions: Vec::new(),
        }
    }

    fn with_params(mut self, params: SearchParams) -> Self {
        self.params = Some(params);
        self
    }

    fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.suggestions = suggestions.iter().map(|s| s.to_string()).collect();
        self
    }
}

impl VideoSource for FakeSource {
    fn load_videos(&mut self, request: LoadRequest) {
        self.log.borrow_mut().requests.push(request);
    }

    fn abort(&mut self) {
        self.log.borrow_mut().aborts += 1;
    }

    fn load_thumbnail(&mut self, _binding: BindingId, video: &Video) {
        self.log.borrow_mut().thumbnails.push(video.id);
    }

    fn suggestions(&self) -> Vec<String> {
        self.suggestions.clone()
    }

    fn search_params(&self) -> Option<&SearchParams> {
        self.params.as_ref()
    }
}

/// Records events and tracks the row count a list view would compute from
/// them.
#[derive(Default)]
struct Recorder {
    events: Vec<PlaylistEvent>,
    rows: usize,
}

struct RecordingListener(Rc<RefCell<Recorder>>);

impl PlaylistListener for RecordingListener {
    fn on_playlist_event(&mut self, event: &PlaylistEvent) {
        let mut recorder = self.0.borrow_mut();
        match event {
            PlaylistEvent::RowsInserted { first, last } => recorder.rows += last - first + 1,
            PlaylistEvent::RowsRemoved { first, last } => recorder.rows -= last - first + 1,
            _ => {}
        }
        recorder.events.push(event.clone());
    }
}

struct Fixture {
    model: PlaylistModel,
    log: Rc<RefCell<SourceLog>>,
    recorder: Rc<RefCell<Recorder>>,
}

impl Fixture {
    fn new() -> Self {
        Self::with_settings(PlaylistSettings::default())
    }

    fn with_settings(settings: PlaylistSettings) -> Self {
        let mut model = PlaylistModel::new(settings);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        model.subscribe(Box::new(RecordingListener(Rc::clone(&recorder))));
        Self {
            model,
            log: Rc::new(RefCell::new(SourceLog::default())),
            recorder,
        }
    }

    fn bind(&mut self) {
        let source = FakeSource::new(&self.log);
        self.bind_source(source);
    }

    fn bind_source(&mut self, source: FakeSource) {
        self.model.set_video_source(Box::new(source));
        // A view resets its row count on a reset
        self.recorder.borrow_mut().rows = self.model.row_count();
    }

    fn binding(&self) -> BindingId {
        self.log.borrow().requests.last().unwrap().binding
    }

    fn arrive(&mut self, name: &str) -> VideoId {
        let video = video(name);
        let id = video.id;
        let binding = self.binding();
        self.model
            .handle_source_event(SourceEvent::new(binding, SourceEventKind::GotVideo(video)));
        id
    }

    fn finish(&mut self, total: usize) {
        let binding = self.binding();
        self.model
            .handle_source_event(SourceEvent::new(binding, SourceEventKind::Finished { total }));
    }

    fn fail(&mut self, message: &str) {
        let binding = self.binding();
        self.model.handle_source_event(SourceEvent::new(
            binding,
            SourceEventKind::Error(message.to_string()),
        ));
    }

    /// Binds a source and loads a complete first page of `names`.
    fn loaded(names: &[&str]) -> (Self, Vec<VideoId>) {
        let mut fixture = Self::new();
        fixture.bind();
        let ids = names.iter().map(|name| fixture.arrive(name)).collect();
        fixture.finish(names.len());
        fixture.clear_events();
        (fixture, ids)
    }

    fn titles(&self) -> Vec<String> {
        self.model.videos().iter().map(|v| v.title.clone()).collect()
    }

    fn events(&self) -> Vec<PlaylistEvent> {
        self.recorder.borrow().events.clone()
    }

    fn clear_events(&mut self) {
        self.recorder.borrow_mut().events.clear();
    }

    fn listener_rows(&self) -> usize {
        self.recorder.borrow().rows
    }
}

fn video(name: &str) -> Video {
    Video::new(
        format!("/videos/{name}.mp4"),
        name.to_string(),
        "Author".to_string(),
    )
}

// ==================== Pagination ====================

#[test]
fn test_bind_issues_first_fetch() {
    let mut fixture = Fixture::new();
    fixture.bind();

    let log = fixture.log.borrow();
    assert_eq!(log.requests.len(), 1);
    assert_eq!(log.requests[0].max, 10);
    assert_eq!(log.requests[0].skip, 0);
    assert!(fixture.model.is_searching());
    assert_eq!(fixture.events()[0], PlaylistEvent::Reset);
}

#[test]
fn test_search_more_while_in_flight_is_ignored() {
    let mut fixture = Fixture::new();
    fixture.bind();

    fixture.model.search_more();
    fixture.model.search_more_by(3);
    fixture.model.search_needed();

    assert_eq!(fixture.log.borrow().requests.len(), 1);
}

#[test]
fn test_offset_advances_when_requested() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.finish(10);

    fixture.model.search_more_by(4);
    fixture.finish(4);
    fixture.model.search_more();

    let skips: Vec<usize> = fixture.log.borrow().requests.iter().map(|r| r.skip).collect();
    assert_eq!(skips, vec![0, 10, 14]);
}

#[test]
fn test_search_more_without_source_does_nothing() {
    let mut fixture = Fixture::new();
    fixture.model.search_more();
    assert!(!fixture.model.is_searching());
    assert!(fixture.events().is_empty());
}

#[test]
fn test_first_arrival_becomes_active() {
    let mut fixture = Fixture::new();
    fixture.bind();

    fixture.arrive("a");
    fixture.arrive("b");
    fixture.arrive("c");

    assert!(fixture.model.is_active(0));
    assert!(!fixture.model.is_active(1));
    assert_eq!(fixture.model.active_video().unwrap().title, "a");
    assert!(fixture.events().contains(&PlaylistEvent::ActiveRowChanged(0)));
}

#[test]
fn test_manual_play_leaves_nothing_active() {
    let mut fixture = Fixture::with_settings(PlaylistSettings {
        manual_play: true,
        ..PlaylistSettings::default()
    });
    fixture.bind();
    fixture.arrive("a");

    assert_eq!(fixture.model.active_row(), None);
    assert!(!fixture.model.is_active(0));
}

#[test]
fn test_row_count_hides_status_row_while_loading_into_list() {
    let mut fixture = Fixture::new();
    fixture.bind();

    // Empty list, status row always visible
    assert_eq!(fixture.model.row_count(), 1);

    fixture.arrive("a");
    fixture.arrive("b");
    fixture.arrive("c");
    assert_eq!(fixture.model.row_count(), 3);

    fixture.finish(3);
    assert_eq!(fixture.model.row_count(), 4);
    assert_eq!(fixture.model.row_kind(3), Some(RowKind::Status));
}

#[test]
fn test_listener_row_count_matches_model() {
    let mut fixture = Fixture::new();
    fixture.bind();
    assert_eq!(fixture.listener_rows(), fixture.model.row_count());

    let a = fixture.arrive("a");
    assert_eq!(fixture.listener_rows(), fixture.model.row_count());
    fixture.arrive("b");
    fixture.arrive("c");
    fixture.finish(10);
    assert_eq!(fixture.listener_rows(), fixture.model.row_count());

    fixture.model.search_more();
    assert_eq!(fixture.listener_rows(), fixture.model.row_count());

    fixture.model.remove_videos(&[a]);
    assert_eq!(fixture.listener_rows(), fixture.model.row_count());

    fixture.model.abort_search();
    assert_eq!(fixture.listener_rows(), fixture.model.row_count());
    assert_eq!(fixture.model.row_count(), 1);
}

#[test]
fn test_arrival_notifies_inserted_row() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.finish(10);
    fixture.model.search_more();
    fixture.clear_events();

    fixture.arrive("a");

    assert_eq!(fixture.events()[0], PlaylistEvent::inserted(0, 0));
}

#[test]
fn test_arrival_requests_thumbnail() {
    let mut fixture = Fixture::new();
    fixture.bind();
    let id = fixture.arrive("a");

    assert_eq!(fixture.log.borrow().thumbnails, vec![id]);

    let binding = fixture.binding();
    fixture.clear_events();
    fixture.model.handle_source_event(SourceEvent::new(
        binding,
        SourceEventKind::GotThumbnail { id, artwork: true },
    ));

    assert!(fixture.model.video_at(0).unwrap().thumbnail_loaded());
    assert_eq!(fixture.events(), vec![PlaylistEvent::changed(0, 0)]);
}

#[test]
fn test_duplicate_arrival_ignored() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.arrive("a");
    fixture.arrive("a");
    assert_eq!(fixture.model.len(), 1);
}

#[test]
fn test_short_page_means_no_more_videos() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.arrive("a");
    fixture.arrive("b");
    fixture.arrive("c");
    fixture.finish(3);

    assert!(!fixture.model.can_search_more());
    assert_eq!(fixture.model.display_text(3).unwrap(), "No more videos");
}

#[test]
fn test_full_page_offers_more() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.finish(10);

    assert!(fixture.model.can_search_more());
    assert_eq!(fixture.model.status_text(), "Show 10 More");
}

#[test]
fn test_empty_result_says_no_videos() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.finish(0);

    assert_eq!(fixture.model.status_text(), "No videos");
}

#[test]
fn test_status_while_searching() {
    let mut fixture = Fixture::new();
    fixture.bind();
    assert_eq!(fixture.model.display_text(0).unwrap(), "Searching...");
}

#[test]
fn test_error_shown_in_status_row() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.fail("network down");

    assert!(!fixture.model.is_searching());
    assert!(fixture.model.status_is_error());
    assert_eq!(fixture.model.display_text(0).unwrap(), "network down");
    assert_eq!(fixture.model.row_count(), 1);
}

#[test]
fn test_error_cleared_by_next_fetch() {
    let mut fixture = Fixture::new();
    fixture.bind();
    fixture.fail("network down");

    fixture.model.search_more();

    assert!(!fixture.model.status_is_error());
    assert_eq!(fixture.model.status_text(), "Searching...");
    assert_eq!(fixture.log.borrow().requests.len(), 2);
}

#[test]
fn test_finish_emits_suggestions() {
    let mut fixture = Fixture::new();
    let source = FakeSource::new(&fixture.log).with_suggestions(&["cats", "dogs"]);
    fixture.bind_source(source);

    fixture.finish(0);

    assert!(fixture.events().contains(&PlaylistEvent::SuggestionsAvailable(vec![
        "cats".to_string(),
        "dogs".to_string()
    ])));
}

#[test]
fn test_search_needed_tops_up_after_active() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c", "d"]);
    fixture.model.set_active_row(2);

    fixture.model.search_needed();

    // 4 videos with row 2 active leaves 2 queued, 8 more keeps a page
    let log = fixture.log.borrow();
    assert_eq!(log.requests.len(), 2);
    assert_eq!(log.requests[1].max, 8);
    assert_eq!(log.requests[1].skip, 10);
}

#[test]
fn test_search_needed_with_full_buffer_does_nothing() {
    let names: Vec<String> = (0..12).map(|i| format!("v{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let (mut fixture, _) = Fixture::loaded(&refs);

    fixture.model.search_needed();

    assert_eq!(fixture.log.borrow().requests.len(), 1);
}

// ==================== Binding and abort ====================

#[test]
fn test_stale_events_are_ignored_after_rebind() {
    let mut fixture = Fixture::new();
    fixture.bind();
    let stale = fixture.binding();

    fixture.bind();
    fixture.model.handle_source_event(SourceEvent::new(
        stale,
        SourceEventKind::GotVideo(video("old")),
    ));
    fixture
        .model
        .handle_source_event(SourceEvent::new(stale, SourceEventKind::Finished { total: 1 }));

    assert!(fixture.model.is_empty());
    assert!(fixture.model.is_searching());
}

#[test]
fn test_rebind_aborts_previous_source_and_resets() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b"]);
    fixture.model.set_hovered_row(Some(1));

    fixture.bind();

    assert_eq!(fixture.log.borrow().aborts, 1);
    assert!(fixture.model.is_empty());
    assert_eq!(fixture.model.active_row(), None);
    assert_eq!(fixture.model.hovered_row(), None);
    assert!(fixture.model.can_search_more());
    assert_eq!(fixture.log.borrow().requests.last().unwrap().skip, 0);
}

#[test]
fn test_abort_clears_list_with_single_notification() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c"]);

    fixture.model.abort_search();

    assert!(fixture.model.is_empty());
    assert_eq!(fixture.model.active_row(), None);
    assert_eq!(fixture.log.borrow().aborts, 1);
    assert_eq!(fixture.events()[0], PlaylistEvent::removed(0, 2));
}

#[test]
fn test_abort_twice_is_idempotent() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b"]);

    fixture.model.abort_search();
    let first_count = fixture.model.row_count();
    let first_status = fixture.model.status_text();
    fixture.clear_events();

    fixture.model.abort_search();

    assert!(fixture.model.is_empty());
    assert_eq!(fixture.model.row_count(), first_count);
    assert_eq!(fixture.model.status_text(), first_status);
    assert!(
        !fixture
            .events()
            .iter()
            .any(|e| matches!(e, PlaylistEvent::RowsRemoved { .. }))
    );
}

#[test]
fn test_abort_rejects_late_events_but_allows_new_fetch() {
    let mut fixture = Fixture::new();
    fixture.bind();
    let aborted = fixture.binding();

    fixture.model.abort_search();
    assert!(!fixture.model.is_searching());

    fixture.model.handle_source_event(SourceEvent::new(
        aborted,
        SourceEventKind::GotVideo(video("late")),
    ));
    assert!(fixture.model.is_empty());

    fixture.model.search_more();
    assert_ne!(fixture.binding(), aborted);
    fixture.arrive("fresh");
    assert_eq!(fixture.titles(), vec!["fresh"]);
    assert!(fixture.model.is_active(0));
}

// ==================== Removal ====================

#[test]
fn test_remove_videos_removes_and_notifies_each_row() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c", "d"]);

    fixture.model.remove_videos(&[ids[1], ids[3]]);

    assert_eq!(fixture.titles(), vec!["a", "c"]);
    assert_eq!(fixture.model.row_for_video(ids[1]), None);
    assert_eq!(
        fixture.events(),
        vec![PlaylistEvent::removed(1, 1), PlaylistEvent::removed(2, 2)]
    );
}

#[test]
fn test_remove_unknown_video_is_noop() {
    let (mut fixture, _) = Fixture::loaded(&["a"]);
    fixture.model.remove_videos(&[VideoId(42)]);
    assert_eq!(fixture.titles(), vec!["a"]);
    assert!(fixture.events().is_empty());
}

#[test]
fn test_remove_active_video_clears_active() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b"]);
    assert!(fixture.model.is_active(0));

    fixture.model.remove_videos(&[ids[0]]);

    assert_eq!(fixture.model.active_row(), None);
    assert!(fixture.model.active_video().is_none());
}

#[test]
fn test_remove_before_active_shifts_active_row() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c"]);
    fixture.model.set_active_row(2);

    fixture.model.remove_videos(&[ids[0]]);

    assert_eq!(fixture.model.active_row(), Some(1));
    assert_eq!(fixture.model.active_video().unwrap().title, "c");
}

#[test]
fn test_remove_rows_ignores_status_row() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b"]);
    fixture.model.remove_rows(&[0, 2, 7]);
    assert_eq!(fixture.titles(), vec!["b"]);
}

#[test]
fn test_remove_range_hands_back_videos() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c", "d"]);

    let removed = fixture.model.remove_range(1, 2);

    assert_eq!(removed.len(), 2);
    assert_eq!(removed[0].title, "b");
    assert_eq!(fixture.titles(), vec!["a", "d"]);
    assert_eq!(fixture.events(), vec![PlaylistEvent::removed(1, 2)]);
}

#[test]
fn test_remove_range_out_of_bounds() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b"]);

    assert!(fixture.model.remove_range(5, 1).is_empty());
    assert!(fixture.model.remove_range(0, 0).is_empty());
    let clamped = fixture.model.remove_range(1, 100);

    assert_eq!(clamped.len(), 1);
    assert_eq!(fixture.titles(), vec!["a"]);
    assert_eq!(fixture.events(), vec![PlaylistEvent::removed(1, 1)]);
}

// ==================== Moving ====================

#[test]
fn test_move_up_tracks_active_video() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c", "d"]);
    fixture.model.set_active_row(2);
    fixture.clear_events();

    fixture.model.move_videos(&[ids[2]], MoveDirection::Up);

    assert_eq!(fixture.titles(), vec!["a", "c", "b", "d"]);
    assert!(fixture.model.is_active(1));
    assert!(!fixture.model.is_active(2));
    assert_eq!(
        fixture.events(),
        vec![
            PlaylistEvent::removed(2, 2),
            PlaylistEvent::inserted(1, 1),
            PlaylistEvent::NeedSelectionFor(vec![ids[2]]),
        ]
    );
}

#[test]
fn test_move_neighbour_of_active_video() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c"]);
    assert!(fixture.model.is_active(0));

    fixture.model.move_videos(&[ids[1]], MoveDirection::Up);

    assert_eq!(fixture.titles(), vec!["b", "a", "c"]);
    assert!(fixture.model.is_active(1));
}

#[test]
fn test_move_down_block_keeps_shape() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c", "d", "e"]);

    fixture
        .model
        .move_videos(&[ids[1], ids[2]], MoveDirection::Down);

    assert_eq!(fixture.titles(), vec!["a", "d", "b", "c", "e"]);
}

#[test]
fn test_move_up_stops_at_top() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c", "d"]);

    fixture
        .model
        .move_videos(&[ids[0], ids[1], ids[3]], MoveDirection::Up);

    assert_eq!(fixture.titles(), vec!["a", "b", "d", "c"]);
}

#[test]
fn test_move_down_stops_at_bottom() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c"]);

    fixture.model.move_videos(&[ids[2]], MoveDirection::Down);

    assert_eq!(fixture.titles(), vec!["a", "b", "c"]);
    assert_eq!(
        fixture.events(),
        vec![PlaylistEvent::NeedSelectionFor(vec![ids[2]])]
    );
}

// ==================== Drag and drop ====================

#[test]
fn test_drop_moves_videos_in_order_before_row() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c", "d", "e"]);
    let transfer = fixture.model.transfer_for_rows(&[0, 1]);

    assert!(fixture.model.drop_transfer(&transfer, Some(4)));

    assert_eq!(fixture.titles(), vec!["c", "d", "a", "b", "e"]);
    assert!(
        fixture
            .events()
            .contains(&PlaylistEvent::NeedSelectionFor(vec![ids[0], ids[1]]))
    );
}

#[test]
fn test_drop_upwards() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c", "d", "e"]);
    let transfer = fixture.model.transfer_for_rows(&[3, 4]);

    fixture.model.drop_transfer(&transfer, Some(1));

    assert_eq!(fixture.titles(), vec!["a", "d", "e", "b", "c"]);
}

#[test]
fn test_drop_at_end_or_on_status_row() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c"]);

    let transfer = fixture.model.transfer_for_rows(&[0]);
    fixture.model.drop_transfer(&transfer, None);
    assert_eq!(fixture.titles(), vec!["b", "c", "a"]);

    let transfer = fixture.model.transfer_for_rows(&[0]);
    fixture.model.drop_transfer(&transfer, Some(99));
    assert_eq!(fixture.titles(), vec!["c", "a", "b"]);
}

#[test]
fn test_drop_tracks_active_video() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c", "d"]);
    fixture.model.set_active_row(1);

    let transfer = fixture.model.transfer_for_rows(&[1]);
    fixture.model.drop_transfer(&transfer, None);

    assert_eq!(fixture.titles(), vec!["a", "c", "d", "b"]);
    assert_eq!(fixture.model.active_row(), Some(3));
    assert_eq!(fixture.model.active_video().unwrap().title, "b");
}

#[test]
fn test_drop_of_foreign_videos_is_refused() {
    let (mut fixture, _) = Fixture::loaded(&["a"]);
    let (other, _) = Fixture::loaded(&["x"]);
    let transfer = other.model.transfer_for_rows(&[0]);

    assert!(!fixture.model.drop_transfer(&transfer, Some(0)));
    assert!(!fixture.model.drop_transfer(&VideoTransfer::default(), Some(0)));
    assert_eq!(fixture.titles(), vec!["a"]);
}

#[test]
fn test_status_row_is_not_draggable() {
    let (fixture, _) = Fixture::loaded(&["a", "b"]);

    assert!(fixture.model.is_draggable(1));
    assert!(!fixture.model.is_draggable(2));
    assert_eq!(fixture.model.transfer_for_rows(&[1, 2, 1]).len(), 1);
}

// ==================== Active row navigation ====================

#[test]
fn test_set_active_row_notifies_old_and_new() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c"]);

    fixture.model.set_active_row(2);

    assert_eq!(
        fixture.events(),
        vec![
            PlaylistEvent::changed(0, 0),
            PlaylistEvent::changed(2, 2),
            PlaylistEvent::ActiveRowChanged(2),
        ]
    );
}

#[test]
fn test_set_active_row_out_of_range_clears() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b"]);

    fixture.model.set_active_row(2);

    assert_eq!(fixture.model.active_row(), None);
    assert!(!fixture.model.is_active(2));
}

#[test]
fn test_next_and_previous_row() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c"]);

    assert_eq!(fixture.model.previous_row(), None);
    assert_eq!(fixture.model.next_row(), Some(1));

    fixture.model.set_active_row(2);
    assert_eq!(fixture.model.next_row(), None);
    assert_eq!(fixture.model.previous_row(), Some(1));
}

// ==================== Queries ====================

#[test]
fn test_out_of_range_rows_are_absent() {
    let (fixture, _) = Fixture::loaded(&["a"]);

    assert!(fixture.model.video_at(1).is_none());
    assert!(fixture.model.display_text(2).is_none());
    assert_eq!(fixture.model.row_kind(2), None);
    assert!(!fixture.model.is_active(5));
}

// ==================== Hover ====================

#[test]
fn test_hover_notifies_old_and_new_rows() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c"]);

    fixture.model.set_hovered_row(Some(0));
    fixture.model.set_hovered_row(Some(2));
    fixture.model.clear_hover();

    assert_eq!(
        fixture.events(),
        vec![
            PlaylistEvent::changed(0, 0),
            PlaylistEvent::changed(0, 0),
            PlaylistEvent::changed(2, 2),
            PlaylistEvent::changed(2, 2),
        ]
    );
    assert_eq!(fixture.model.hovered_row(), None);
}

#[test]
fn test_hover_follows_video_when_rows_removed_above() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c", "d"]);
    fixture.model.set_hovered_row(Some(3));

    fixture.model.remove_videos(&[ids[0]]);
    assert_eq!(fixture.model.hovered_row(), Some(2));

    fixture.model.remove_range(0, 2);
    assert_eq!(fixture.model.hovered_row(), Some(0));
    assert_eq!(fixture.model.hovered_video().unwrap().title, "d");
}

#[test]
fn test_hover_dropped_with_its_video() {
    let (mut fixture, ids) = Fixture::loaded(&["a", "b", "c"]);
    fixture.model.set_hovered_row(Some(1));
    fixture.model.enter_author_hover();

    fixture.model.remove_videos(&[ids[1]]);

    assert_eq!(fixture.model.hovered_row(), None);
    assert!(fixture.model.hovered_video().is_none());
    assert!(!fixture.model.author_hovered());
}

#[test]
fn test_hover_never_points_past_end() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c"]);
    fixture.model.set_hovered_row(Some(2));

    fixture.model.remove_range(1, 5);

    assert_eq!(fixture.model.hovered_row(), None);
    assert!(!fixture.model.is_hovered(2));
}

#[test]
fn test_hover_follows_video_moved_by_drop() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b", "c", "d"]);
    fixture.model.set_hovered_row(Some(2));

    let transfer = fixture.model.transfer_for_rows(&[3]);
    fixture.model.drop_transfer(&transfer, Some(0));

    assert_eq!(fixture.titles(), vec!["d", "a", "b", "c"]);
    assert_eq!(fixture.model.hovered_video().unwrap().title, "c");
}

#[test]
fn test_author_hover_and_press() {
    let (mut fixture, _) = Fixture::loaded(&["a", "b"]);
    fixture.model.set_hovered_row(Some(1));
    fixture.clear_events();

    fixture.model.enter_author_hover();
    fixture.model.enter_author_hover();
    fixture.model.enter_author_pressed();
    assert!(fixture.model.author_hovered());
    assert!(fixture.model.author_pressed());

    fixture.model.exit_author_pressed();
    fixture.model.exit_author_hover();
    fixture.model.exit_author_hover();

    assert!(!fixture.model.author_hovered());
    assert_eq!(fixture.events().len(), 4);
    assert_eq!(fixture.model.hovered_video().unwrap().title, "b");
}

// ==================== Recent searches ====================

#[test]
fn test_first_video_remembers_keyword_and_channel() {
    let mut fixture = Fixture::new();
    let params = SearchParams {
        keywords: "cats".to_string(),
        author: "Bob".to_string(),
        transient: false,
    };
    fixture.bind_source(FakeSource::new(&fixture.log).with_params(params));

    let mut first = video("a");
    first.author = "Bob".to_string();
    first.author_uri = Some("file:///videos/bob".to_string());
    let binding = fixture.binding();
    fixture
        .model
        .handle_source_event(SourceEvent::new(binding, SourceEventKind::GotVideo(first)));
    fixture.arrive("b");

    let remembered: Vec<PlaylistEvent> = fixture
        .events()
        .into_iter()
        .filter(|e| {
            matches!(
                e,
                PlaylistEvent::RecentKeyword(_) | PlaylistEvent::RecentChannel(_)
            )
        })
        .collect();

    assert_eq!(
        remembered,
        vec![
            PlaylistEvent::RecentKeyword("cats".to_string()),
            PlaylistEvent::RecentChannel("file:///videos/bob|Bob".to_string()),
        ]
    );
}

#[test]
fn test_url_keyword_remembered_with_title() {
    let mut fixture = Fixture::new();
    let params = SearchParams::for_keywords("http://example.com/v".to_string());
    fixture.bind_source(FakeSource::new(&fixture.log).with_params(params));

    fixture.arrive("Some Title");

    assert!(fixture.events().contains(&PlaylistEvent::RecentKeyword(
        "http://example.com/v|Some Title".to_string()
    )));
}

#[test]
fn test_transient_search_not_remembered() {
    let mut fixture = Fixture::new();
    let params = SearchParams {
        keywords: "cats".to_string(),
        transient: true,
        ..SearchParams::default()
    };
    fixture.bind_source(FakeSource::new(&fixture.log).with_params(params));

    fixture.arrive("a");

    assert!(
        !fixture
            .events()
            .iter()
            .any(|e| matches!(e, PlaylistEvent::RecentKeyword(_)))
    );
}

// ==================== Listeners ====================

#[test]
fn test_unsubscribed_listener_gets_nothing() {
    let mut model = PlaylistModel::new(PlaylistSettings::default());
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let id = model.subscribe(Box::new(RecordingListener(Rc::clone(&recorder))));

    assert!(model.unsubscribe(id));
    assert!(!model.unsubscribe(id));

    let log = Rc::new(RefCell::new(SourceLog::default()));
    model.set_video_source(Box::new(FakeSource::new(&log)));

    assert!(recorder.borrow().events.is_empty());
}
