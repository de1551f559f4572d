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

//! The command line at the bottom of the screen.
//!
//! While a command is being typed it shows the input and the cursor,
//! otherwise the outcome of the last command or the latest status message.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let style = Style::default()
        .fg(app.theme.commander_colour)
        .bg(app.theme.gauge_track_colour);

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value())).style(style),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.cursor() as u16;
        f.set_cursor_position((cursor_x, container[0].y));
        return;
    }

    let text = commander
        .message()
        .or(app.status_message.as_deref())
        .unwrap_or_default();

    let style = if commander.message().is_some() {
        style.fg(app.theme.error_colour)
    } else {
        style
    };

    f.render_widget(Paragraph::new(text).style(style), container[0]);
}
