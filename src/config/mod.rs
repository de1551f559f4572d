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

//! Application configuration.
//!
//! This module manages the application configuration file, including the
//! lists of recently used search keywords and channels.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "chootube";
const LOG_FILE_NAME: &str = "chootube.log";
const DATABASE_FILE_NAME: &str = "chootube.db";

pub(crate) const DEFAULT_PAGE_SIZE: usize = 10;

const MAX_RECENT_ELEMENTS: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub media_dirs: Vec<String>,
    pub manual_play: bool,
    pub page_size: usize,
    pub recent_keywords: RecentList,
    pub recent_channels: RecentList,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            media_dirs: vec![],
            manual_play: false,
            page_size: DEFAULT_PAGE_SIZE,
            recent_keywords: RecentList::default(),
            recent_channels: RecentList::default(),
        }
    }
}

impl AppConfig {
    pub(crate) fn playlist_settings(&self) -> PlaylistSettings {
        PlaylistSettings {
            manual_play: self.manual_play,
            page_size: self.page_size.max(1),
        }
    }
}

/// Settings injected into the playlist when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlaylistSettings {
    /// When set, the first video found is not made active automatically.
    pub(crate) manual_play: bool,
    pub(crate) page_size: usize,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            manual_play: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A bounded, most recent first list without duplicates.
///
/// Entries may carry a display label after a `|` separator, for example a
/// channel stored as `uri|name`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RecentList(Vec<String>);

impl RecentList {
    pub(crate) fn push(&mut self, entry: String) {
        self.0.retain(|existing| *existing != entry);
        self.0.insert(0, entry);
        self.0.truncate(MAX_RECENT_ELEMENTS);
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Splits a recent entry into its value and optional display label.
pub(crate) fn split_recent_entry(entry: &str) -> (&str, Option<&str>) {
    match entry.split_once('|') {
        Some((value, label)) => (value, Some(label)),
        None => (entry, None),
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// The log file lives next to the configuration file.
pub(crate) fn log_file_path() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .map(|path| path.with_file_name(LOG_FILE_NAME))
}

/// The catalog database lives next to the configuration file, or in the
/// working directory if there is no configuration directory.
pub(crate) fn database_path() -> String {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .map(|path| path.with_file_name(DATABASE_FILE_NAME))
        .and_then(|path| path.to_str().map(str::to_string))
        .unwrap_or_else(|| DATABASE_FILE_NAME.to_string())
}
