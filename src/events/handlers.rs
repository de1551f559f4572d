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

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    App, MainView,
    config,
    events::CatalogEvent,
    model::SearchParams,
    player::PlayerState,
    playlist::PlaylistEvent,
    source::SourceEvent,
};

pub(super) fn handle_catalog_event(app: &mut App, catalog_event: CatalogEvent) {
    match catalog_event {
        CatalogEvent::Started => app.status_message = Some("Scanning catalog...".to_string()),
        CatalogEvent::StartedDirectory(dir) => {
            app.status_message = Some(format!("Scanning {dir}"));
        }
        CatalogEvent::ProcessedFile(count, _) => {
            app.status_message = Some(format!("Scanning... {count} videos"));
        }
        CatalogEvent::FinishedDirectory(_) => {}
        CatalogEvent::Finished(count) => {
            app.status_message = Some(format!("Catalog updated, {count} videos"));

            // Run the current search again against the new catalog
            let params = app
                .playlist
                .search_params()
                .cloned()
                .unwrap_or_else(App::browse_all);
            app.bind_search(params);
        }
    }
}

pub(super) fn handle_source_event(app: &mut App, source_event: SourceEvent) {
    app.playlist.handle_source_event(source_event);
}

pub(super) fn handle_playlist_event(app: &mut App, event: PlaylistEvent) -> Result<()> {
    match event {
        PlaylistEvent::ActiveRowChanged(_) => play_active_video(app)?,

        PlaylistEvent::SuggestionsAvailable(suggestions) => {
            app.playlist_view.set_suggestions(suggestions);
        }

        PlaylistEvent::NeedSelectionFor(ids) => {
            app.playlist_view.select_videos(&ids, &app.playlist);
            sync_hover(app);
        }

        PlaylistEvent::RecentKeyword(keyword) => {
            app.config.recent_keywords.push(keyword);
            save_recent(app);
        }

        PlaylistEvent::RecentChannel(channel) => {
            app.config.recent_channels.push(channel);
            save_recent(app);
        }

        PlaylistEvent::Reset => app.playlist_view.reset(),

        row_event => {
            app.playlist_view.apply_row_event(&row_event);
            sync_hover(app);
        }
    }

    Ok(())
}

/// Keeps the model's hovered row on the view's cursor after rows moved
/// under it.
fn sync_hover(app: &mut App) {
    let cursor = app
        .playlist_view
        .cursor()
        .filter(|&row| row < app.playlist.row_count());
    app.playlist.set_hovered_row(cursor);
}

fn play_active_video(app: &mut App) -> Result<()> {
    let Some(video) = app.playlist.active_video() else {
        return Ok(());
    };

    if app.now_playing.as_ref().is_some_and(|playing| playing.id == video.id) {
        return Ok(());
    }

    let video = video.clone();
    info!(title = %video.title, file = %video.filename, "Playing video");

    app.player.play_file(&video.filename)?;
    app.now_playing = Some(video);
    app.player_title = None;

    Ok(())
}

fn save_recent(app: &mut App) {
    if let Err(e) = config::save_config(&app.config) {
        warn!(error = %e, "Failed to save recent searches");
    }
    app.recent_view.refresh(&app.config);
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    match main_view {
        MainView::Recent => {
            app.recent_view.refresh(&app.config);
            app.playlist.clear_hover();
        }
        MainView::Playlist => sync_hover(app),
    }
    app.main_view = main_view;
}

pub(super) fn handle_search(app: &mut App, params: SearchParams) {
    app.bind_search(params);
    handle_set_main_view(app, MainView::Playlist);
}

pub(super) fn handle_clear_playlist(app: &mut App) {
    let rows: Vec<usize> = (0..app.playlist.len()).collect();
    app.playlist.remove_rows(&rows);
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_title_changed(app: &mut App, title: String) {
    app.player_title = Some(title);
}

pub(super) fn handle_duration_changed(app: &mut App, dur: u64) {
    app.player_duration = Some(dur);
}

pub(super) fn handle_volume_changed(app: &mut App, vol: u32) {
    app.volume = Some(vol);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

/// Moves on to the next video and keeps a page queued up behind it.
pub(super) fn handle_video_finished(app: &mut App) {
    app.player_time = app.player_duration;

    match app.playlist.next_row() {
        Some(row) => app.playlist.set_active_row(row),
        None => app.now_playing = None,
    }

    app.playlist.search_needed();
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "Application error");
    app.status_message = Some(message);
}
