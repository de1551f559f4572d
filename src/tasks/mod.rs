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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload tasks such as
//! potentially blocking catalog queries from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into database
//! and file operations and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are better suited
//! to events.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use rusqlite::Connection;
use tracing::{error, info};

use crate::{
    config::{self, AppConfig},
    db,
    events::AppEvent,
    model::VideoId,
    source::{BindingId, catalog::CatalogQuery},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    ScanCatalog,

    LoadVideos(CatalogQuery),

    LoadThumbnail {
        binding: BindingId,
        id: VideoId,
        filename: String,
    },
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own database connection and enters
/// a blocking loop, listening for incoming [`AppTask`]s. If the database
/// cannot be opened the failure is reported as a fatal error and the worker
/// exits, after which sources report the catalog as unavailable.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let path = config::database_path();
        let mut conn = match db::init_db(&path) {
            Ok(conn) => conn,
            Err(e) => {
                error!(%path, error = %format!("{e:#}"), "Failed to open catalog");
                let _ = event_tx.send(AppEvent::FatalError(format!(
                    "Failed to open catalog {path}: {e:#}"
                )));
                return;
            }
        };

        info!(%path, "Task worker started");

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                conn: &mut conn,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    conn: &'a mut Connection,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::ScanCatalog => handlers::scan_catalog(ctx),

        AppTask::LoadVideos(query) => handlers::load_videos(ctx, query),

        AppTask::LoadThumbnail {
            binding,
            id,
            filename,
        } => handlers::load_thumbnail(ctx, binding, id, &filename),
    }
}
