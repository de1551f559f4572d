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

//! The MPV worker.
//!
//! The worker owns the MPV context on its own thread. Each turn of its loop
//! drains the pending [`VideoPlayerCommand`]s, then waits briefly for an MPV
//! event and turns property changes into [`AppEvent`]s for the UI.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use mpv::Format;
use tracing::{debug, error, info};

use crate::{events::AppEvent, player::PlayerState};

const EVENT_WAIT_SECS: f64 = 0.05;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum VideoPlayerCommand {
    PlayFile(String),
    TogglePause,
    Seek(i32),
    Stop,
    AdjustVolume(i32),
    ToggleMute,
}

/// Starts the worker thread. A failure to run MPV is fatal for the
/// application.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<VideoPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = video_player_worker(command_rx, event_tx) {
            error!(error = ?e, "Video player worker failed");
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {e:#}")));
        }
    });
}

fn video_player_worker(
    command_rx: Receiver<VideoPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        // Keep a window open between videos instead of flashing one per file
        builder
            .set_option("force-window", "yes")
            .context("Failed to set force-window")?;
        builder
            .set_option("idle", "yes")
            .context("Failed to set idle")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<&str>("media-title", 0)
        .context("Failed to observe media-title")?;
    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<f64>("volume", 0)
        .context("Failed to observe volume")?;
    handler
        .observe_property::<bool>("mute", 0)
        .context("Failed to observe mute")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    info!("Video player started");

    let mut flags = PlayerFlags {
        is_paused: false,
        is_idle: true,
        state: PlayerState::Stopped,
    };

    loop {
        if !process_commands(&mut handler, &command_rx)? {
            info!("Video player stopped");
            return Ok(());
        }
        process_mpv_events(&mut handler, &mut flags, &event_tx)?;
    }
}

struct PlayerFlags {
    is_paused: bool,
    is_idle: bool,
    state: PlayerState,
}

/// Runs every pending command. Returns `false` once the UI has dropped its
/// player handle.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<VideoPlayerCommand>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(std::sync::mpsc::TryRecvError::Empty) => return Ok(true),
            Err(std::sync::mpsc::TryRecvError::Disconnected) => return Ok(false),
        };

        debug!(?command, "Player command");

        match command {
            VideoPlayerCommand::PlayFile(filename) => {
                handler
                    .command(&["loadfile", &filename, "replace"])
                    .with_context(|| format!("Failed to load file: {filename}"))?;
                handler
                    .set_property("pause", false)
                    .context("Failed to unpause")?;
            }
            VideoPlayerCommand::TogglePause => {
                handler
                    .command(&["cycle", "pause"])
                    .context("Failed to toggle pause")?;
            }
            VideoPlayerCommand::Seek(delta) => {
                // Seeking with nothing loaded is rejected by MPV, that is fine
                if let Err(e) = handler.command(&["seek", &delta.to_string(), "relative"]) {
                    debug!(error = ?e, "Seek ignored");
                }
            }
            VideoPlayerCommand::Stop => {
                handler.command(&["stop"]).context("Failed to stop")?;
            }
            VideoPlayerCommand::AdjustVolume(delta) => {
                handler
                    .command(&["add", "volume", &delta.to_string()])
                    .context("Failed to change volume")?;
            }
            VideoPlayerCommand::ToggleMute => {
                handler
                    .command(&["cycle", "mute"])
                    .context("Failed to toggle mute")?;
            }
        }
    }
}

fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    flags: &mut PlayerFlags,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(EVENT_WAIT_SECS) else {
        return Ok(());
    };

    let app_event = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("media-title", Format::Str(title)) => Some(AppEvent::TitleChanged(title.to_string())),
            ("duration", Format::Double(duration)) if duration >= 0.0 => {
                Some(AppEvent::DurationChanged(duration as u64))
            }
            ("pause", Format::Flag(pause)) => {
                flags.is_paused = pause;
                None
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                Some(AppEvent::TimeChanged(seconds))
            }
            ("volume", Format::Double(volume)) => {
                Some(AppEvent::VolumeChanged(volume.round().max(0.0) as u32))
            }
            ("mute", Format::Flag(muted)) => Some(AppEvent::MuteChanged(muted)),
            ("idle-active", Format::Flag(idle_active)) => {
                flags.is_idle = idle_active;
                None
            }
            _ => None,
        },
        mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
            Some(AppEvent::VideoFinished)
        }
        _ => None,
    };

    let state = PlayerState::from_flags(flags.is_paused, flags.is_idle);
    if state != flags.state {
        flags.state = state;
        event_tx
            .send(AppEvent::PlayerStateChanged(state))
            .context("Failed to send player state event")?;
    }

    if let Some(event) = app_event {
        event_tx.send(event).context("Failed to send player event")?;
    }

    Ok(())
}
