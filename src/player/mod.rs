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

//! Video playback control.
//!
//! [`VideoPlayer`] is the handle the UI uses to drive playback. It only sends
//! commands to a background worker that owns the MPV context, so a slow file
//! open never blocks drawing.

mod commands;

use std::sync::mpsc;

use anyhow::{Context, Result};

use crate::{events::AppEvent, player::commands::VideoPlayerCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

impl PlayerState {
    /// Collapses MPV's pause and idle flags into a single state.
    fn from_flags(is_paused: bool, is_idle: bool) -> Self {
        if is_idle {
            Self::Stopped
        } else if is_paused {
            Self::Paused
        } else {
            Self::Playing
        }
    }
}

pub(crate) struct VideoPlayer {
    command_tx: mpsc::Sender<VideoPlayerCommand>,
}

impl VideoPlayer {
    /// Spawns the player worker, which reports progress on `event_tx`.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel();

        commands::spawn_player_worker(command_rx, event_tx);

        Self { command_tx }
    }

    fn send(&self, command: VideoPlayerCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .context("Video player is not running")
    }

    /// Replaces whatever is playing with `filename`.
    pub(crate) fn play_file(&self, filename: &str) -> Result<()> {
        self.send(VideoPlayerCommand::PlayFile(filename.to_string()))
    }

    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.send(VideoPlayerCommand::TogglePause)
    }

    pub(crate) fn stop(&self) -> Result<()> {
        self.send(VideoPlayerCommand::Stop)
    }

    /// Changes the volume by `delta` percent.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.send(VideoPlayerCommand::AdjustVolume(delta))
    }

    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.send(VideoPlayerCommand::ToggleMute)
    }

    /// Seeks `delta` seconds from the current position.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.send(VideoPlayerCommand::Seek(delta))
    }
}
