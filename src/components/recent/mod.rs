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

//! Recent searches view.
//!
//! Lists the keywords and channels remembered in the configuration so a
//! search can be run again with a single key press.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    config::{AppConfig, split_recent_entry},
    model::SearchParams,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecentEntry {
    /// A keyword entry as stored, `url|title` or just the keywords.
    Keyword(String),
    /// A channel entry as stored, `uri|name` or just the name.
    Channel(String),
}

impl RecentEntry {
    fn entry(&self) -> &str {
        match self {
            Self::Keyword(entry) | Self::Channel(entry) => entry,
        }
    }

    pub(crate) fn label(&self) -> &str {
        let (value, label) = split_recent_entry(self.entry());
        label.unwrap_or(value)
    }

    /// Keywords are searched by value, a URL keyword carries the title of its
    /// first video as the label. Channels are searched by name, the uri only
    /// identifies them.
    pub(crate) fn search_params(&self) -> SearchParams {
        match self {
            Self::Keyword(entry) => {
                let (value, _) = split_recent_entry(entry);
                SearchParams::for_keywords(value.to_string())
            }
            Self::Channel(_) => SearchParams::for_channel(self.label().to_string()),
        }
    }
}

pub(crate) struct RecentView {
    entries: Vec<RecentEntry>,
    list_state: ListState,
}

impl RecentView {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            list_state: ListState::default(),
        }
    }

    pub(crate) fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    /// Reloads the entries, keywords first, keeping the cursor in range.
    pub(crate) fn refresh(&mut self, config: &AppConfig) {
        self.entries = config
            .recent_keywords
            .entries()
            .iter()
            .cloned()
            .map(RecentEntry::Keyword)
            .chain(
                config
                    .recent_channels
                    .entries()
                    .iter()
                    .cloned()
                    .map(RecentEntry::Channel),
            )
            .collect();

        let cursor = match (self.list_state.selected(), self.entries.len()) {
            (_, 0) => None,
            (Some(row), len) => Some(row.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(cursor);
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn current(&self) -> Option<&RecentEntry> {
        self.cursor().and_then(|row| self.entries.get(row))
    }
}
