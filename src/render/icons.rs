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

//! Symbols used in the interface.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_STOP: &str = "\u{23F9}";

// Variation Selector-15 keeps these as monochrome text instead of emoji, so
// they pick up the theme colours.
pub(crate) const ICON_ARTWORK: &str = "\u{1F5BC}\u{FE0E}";
pub(crate) const ICON_SEARCHING: &str = "\u{231B}\u{FE0E}";

pub(crate) const ICON_VOLUME: &str = "\u{1F509}";
pub(crate) const ICON_MUTED: &str = "\u{1F507}";

pub(crate) const SELECTED_MARK: &str = "\u{25CF}";
