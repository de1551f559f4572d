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

/// How much of a duration [`format_time`] spells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeFormat {
    /// `MM:SS`, minutes keep counting past an hour.
    Minutes,
    /// `H:MM:SS` once the duration reaches an hour, `MM:SS` below that.
    Hours,
}

/// Formats a duration in seconds for display.
///
/// ```ignore
/// assert_eq!(format_time(65, TimeFormat::Minutes), "01:05");
/// assert_eq!(format_time(3725, TimeFormat::Hours), "1:02:05");
/// ```
pub(crate) fn format_time(total_seconds: u64, format: TimeFormat) -> String {
    let hours = total_seconds / 3600;
    let secs = total_seconds % 60;

    match format {
        TimeFormat::Hours if hours > 0 => {
            let mins = (total_seconds % 3600) / 60;
            format!("{hours}:{mins:02}:{secs:02}")
        }
        _ => {
            let mins = total_seconds / 60;
            format!("{mins:02}:{secs:02}")
        }
    }
}

/// Formats a video duration, where zero or negative means unknown.
pub(crate) fn format_duration(duration: i64) -> String {
    match u64::try_from(duration) {
        Ok(secs) if secs > 0 => format_time(secs, TimeFormat::Hours),
        _ => "--:--".to_string(),
    }
}
