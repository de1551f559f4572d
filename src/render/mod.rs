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

//! Drawing of the whole screen.
//!
//! [`draw`] is called after every event. It splits the screen into the main
//! view, the player panel and the command line, and lets each of them draw
//! itself from the current [`App`] state.

mod commander;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App, MainView,
    render::{commander::draw_commander, player::draw_player},
};

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(f.area());

    match app.main_view {
        MainView::Playlist => app
            .playlist_view
            .draw(f, outer[0], &app.playlist, &app.theme),
        MainView::Recent => app.recent_view.draw(f, outer[0], &app.theme),
    }

    draw_player(f, outer[1], app);

    draw_commander(f, outer[2], app);
}
