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

//! Colours used across the interface.
//!
//! Also converts colours to the hexadecimal form the terminal emulator wants
//! when its background is set to match.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) row_time_fg: Color,
    pub(crate) row_author_fg: Color,
    pub(crate) row_title_fg: Color,
    pub(crate) row_active_fg: Color,
    pub(crate) row_selected_bg: Color,
    pub(crate) row_status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 24, 40),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(34, 40, 62),
            commander_colour: Color::Rgb(255, 255, 255),
            error_colour: Color::Rgb(235, 87, 87),

            row_time_fg: Color::Rgb(162, 161, 166),
            row_author_fg: Color::Rgb(129, 200, 235),
            row_title_fg: Color::Rgb(255, 255, 255),
            row_active_fg: Color::Rgb(250, 189, 47),
            row_selected_bg: Color::Rgb(60, 52, 90),
            row_status_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts an RGB colour into a CSS-style hexadecimal string.
    ///
    /// Returns `None` for named and indexed colours, which have no fixed RGB
    /// value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}
