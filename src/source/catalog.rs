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

//! A video source backed by the local catalog database.
//!
//! Queries run on the background task worker, this source only packages a
//! request as an [`AppTask`] and returns immediately. Results come back to the
//! UI thread as [`AppEvent::Source`] events.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
    mpsc::Sender,
};

use tracing::{debug, warn};

use crate::{
    events::AppEvent,
    model::{SearchParams, Video},
    source::{BindingId, LoadRequest, SourceError, SourceEvent, SourceEventKind, VideoSource},
    tasks::AppTask,
};

/// A single page query handed to the task worker.
#[derive(Debug)]
pub(crate) struct CatalogQuery {
    pub(crate) request: LoadRequest,
    pub(crate) params: SearchParams,

    /// Filled in by the worker before it reports the page finished.
    pub(crate) suggestions: Arc<Mutex<Vec<String>>>,

    /// Set when the search is aborted, the worker stops reporting videos.
    pub(crate) cancelled: Arc<AtomicBool>,
}

pub(crate) struct CatalogSearch {
    params: SearchParams,
    task_tx: Sender<AppTask>,
    event_tx: Sender<AppEvent>,
    suggestions: Arc<Mutex<Vec<String>>>,
    cancelled: Arc<AtomicBool>,
}

impl CatalogSearch {
    pub(crate) fn new(
        params: SearchParams,
        task_tx: Sender<AppTask>,
        event_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            params,
            task_tx,
            event_tx,
            suggestions: Arc::new(Mutex::new(Vec::new())),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    fn report_unavailable(&self, binding: BindingId) {
        warn!("Task worker is gone, catalog search failed");
        let event = SourceEvent::new(
            binding,
            SourceEventKind::Error(SourceError::WorkerUnavailable.to_string()),
        );
        let _ = self.event_tx.send(AppEvent::Source(event));
    }
}

impl VideoSource for CatalogSearch {
    fn load_videos(&mut self, request: LoadRequest) {
        // A query that was aborted keeps its flag, later ones get a fresh one
        if self.cancelled.load(Ordering::Relaxed) {
            self.cancelled = Arc::new(AtomicBool::new(false));
        }

        let query = CatalogQuery {
            request,
            params: self.params.clone(),
            suggestions: Arc::clone(&self.suggestions),
            cancelled: Arc::clone(&self.cancelled),
        };

        debug!(?request, params = ?self.params, "Queueing catalog query");

        if self.task_tx.send(AppTask::LoadVideos(query)).is_err() {
            self.report_unavailable(request.binding);
        }
    }

    fn abort(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    fn load_thumbnail(&mut self, binding: BindingId, video: &Video) {
        let task = AppTask::LoadThumbnail {
            binding,
            id: video.id,
            filename: video.filename.clone(),
        };
        if self.task_tx.send(task).is_err() {
            debug!(id = ?video.id, "Dropped thumbnail request");
        }
    }

    fn suggestions(&self) -> Vec<String> {
        self.suggestions
            .lock()
            .map(|suggestions| suggestions.clone())
            .unwrap_or_default()
    }

    fn search_params(&self) -> Option<&SearchParams> {
        Some(&self.params)
    }
}
