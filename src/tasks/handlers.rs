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

use std::{path::Path, sync::atomic::Ordering};

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    db::{self, scan},
    events::AppEvent,
    model::VideoId,
    source::{BindingId, SourceEvent, SourceEventKind, catalog::CatalogQuery},
    tasks::TaskContext,
};

const MAX_SUGGESTIONS: usize = 8;

pub(super) fn scan_catalog(ctx: &mut TaskContext) -> Result<()> {
    let media_dirs = &ctx.config.media_dirs;

    if let Err(e) = scan::process_video_library(ctx.conn, media_dirs, ctx.event_tx) {
        warn!(error = %format!("{e:#}"), "Failure processing catalog");
        ctx.event_tx
            .send(AppEvent::Error(format!("Catalog scan failed: {e:#}")))?;
    }

    Ok(())
}

/// Runs one page query and reports each video, then completion.
///
/// Reporting stops as soon as the query is cancelled. A failed query is
/// reported as a source error rather than failing the task.
pub(super) fn load_videos(ctx: &mut TaskContext, query: CatalogQuery) -> Result<()> {
    let CatalogQuery {
        request,
        params,
        suggestions,
        cancelled,
    } = query;

    let send = |kind| {
        ctx.event_tx
            .send(AppEvent::Source(SourceEvent::new(request.binding, kind)))
    };

    let videos = match db::search_videos(ctx.conn, &params, request.max, request.skip) {
        Ok(videos) => videos,
        Err(e) => {
            warn!(error = %e, ?params, "Catalog search failed");
            send(SourceEventKind::Error(e.to_string()))?;
            return Ok(());
        }
    };

    let total = videos.len();

    for video in videos {
        if cancelled.load(Ordering::Relaxed) {
            debug!(binding = ?request.binding, "Catalog search cancelled");
            return Ok(());
        }
        send(SourceEventKind::GotVideo(video))?;
    }

    match db::related_authors(ctx.conn, &params, MAX_SUGGESTIONS) {
        Ok(related) => {
            if let Ok(mut shared) = suggestions.lock() {
                *shared = related;
            }
        }
        Err(e) => warn!(error = %e, "Failed to find related authors"),
    }

    send(SourceEventKind::Finished { total })?;

    Ok(())
}

pub(super) fn load_thumbnail(
    ctx: &mut TaskContext,
    binding: BindingId,
    id: VideoId,
    filename: &str,
) -> Result<()> {
    let artwork = scan::has_artwork(Path::new(filename));

    ctx.event_tx.send(AppEvent::Source(SourceEvent::new(
        binding,
        SourceEventKind::GotThumbnail { id, artwork },
    )))?;

    Ok(())
}
