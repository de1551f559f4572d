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

//! Video library indexing and database persistence.
//!
//! This module handles the discovery of video files on the local filesystem
//! and the management of the associated catalog records.
//!
//! It utilizes `WalkDir` for directory traversal and `Lofty` for metadata
//! extraction from MP4 containers. Files whose tags cannot be read are still
//! catalogued, named after the file and the directory that holds them.
//!
//! # Performance
//!
//! A scan is performed within a single SQLite transaction to maximize write
//! throughput and ensure the catalog is never observed half rebuilt.

use std::{
    path::Path,
    sync::mpsc::Sender,
};

use anyhow::{Context, Result};
use lofty::{prelude::*, probe::Probe};
use rusqlite::Connection;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    db,
    events::{AppEvent, CatalogEvent},
    model::Video,
};

const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "m4v", "mov", "mkv", "webm", "avi"];

const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Progress is reported once per this many files.
const PROGRESS_INTERVAL: usize = 25;

/// Rebuilds the catalog from the video files under each of `media_dirs`.
///
/// All existing records are replaced. Progress is broadcast as
/// [`CatalogEvent`]s while the scan runs.
///
/// # Returns
///
/// Returns the total number of videos in the catalog after the scan.
///
/// # Errors
///
/// Returns an error if the transaction fails or a database constraint is
/// violated during insertion. Unreadable directories and files are skipped.
pub(crate) fn process_video_library(
    conn: &mut Connection,
    media_dirs: &[String],
    event_tx: &Sender<AppEvent>,
) -> Result<i64> {
    let _ = event_tx.send(AppEvent::Catalog(CatalogEvent::Started));

    let tx = conn.transaction()?;

    tx.execute("DELETE FROM videos", [])?;

    for dir in media_dirs {
        info!(%dir, "Scanning directory");
        let _ = event_tx.send(AppEvent::Catalog(CatalogEvent::StartedDirectory(dir.clone())));

        let mut processed = 0;

        for entry in WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_video_file(e.path()))
        {
            let path = entry.path();

            let Some(video) = read_video(path) else {
                warn!(path = %path.display(), "Skipping file with non UTF-8 path");
                continue;
            };

            db::insert_video(&tx, &video)
                .with_context(|| format!("Failed to catalogue {}", path.display()))?;

            processed += 1;
            if processed % PROGRESS_INTERVAL == 0 {
                let _ = event_tx.send(AppEvent::Catalog(CatalogEvent::ProcessedFile(
                    processed,
                    video.filename,
                )));
            }
        }

        debug!(%dir, processed, "Finished directory");
        let _ = event_tx.send(AppEvent::Catalog(CatalogEvent::FinishedDirectory(dir.clone())));
    }

    tx.commit().context("Failed to commit transaction")?;

    let count = db::count_videos(conn)?;

    info!(count, "Catalog scan complete");
    let _ = event_tx.send(AppEvent::Catalog(CatalogEvent::Finished(count)));

    Ok(count)
}

fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Reads the catalog entry for a single file.
///
/// Returns `None` only if the path is not valid UTF-8.
fn read_video(path: &Path) -> Option<Video> {
    let filename = path.to_str()?.to_string();

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.clone());

    let parent = path.parent();
    let folder_author = parent
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    let mut video = Video::new(filename, stem, folder_author);
    video.author_uri = parent.map(|p| format!("file://{}", p.display()));

    let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No readable tags");
            return Some(video);
        }
    };

    video.duration = i64::try_from(tagged_file.properties().duration().as_secs()).unwrap_or(-1);

    if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        if let Some(title) = tag.title().filter(|t| !t.trim().is_empty()) {
            video.title = title.into_owned();
        }
        if let Some(artist) = tag.artist().filter(|a| !a.trim().is_empty()) {
            video.author = artist.into_owned();
        }
    }

    Some(video)
}

/// Checks whether a file carries embedded cover art to use as its thumbnail.
pub(crate) fn has_artwork(path: &Path) -> bool {
    let Ok(tagged_file) = Probe::open(path).and_then(|p| p.read()) else {
        return false;
    };

    tagged_file
        .tags()
        .iter()
        .any(|tag| !tag.pictures().is_empty())
}
