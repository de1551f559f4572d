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

//! The player panel: what is playing, the elapsed time, the volume and a
//! progress bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_MUTED, ICON_PAUSE, ICON_PLAY, ICON_STOP, ICON_VOLUME},
    util::format::{TimeFormat, format_time},
};

const MAX_VOLUME: f64 = 130.0;

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    if let Some(video) = &app.now_playing {
        let icon = match app.player_state {
            PlayerState::Playing => ICON_PLAY,
            PlayerState::Paused => ICON_PAUSE,
            PlayerState::Stopped => ICON_STOP,
        };

        // MPV's own title wins once known, it may come from container tags
        let title = app.player_title.as_deref().unwrap_or(&video.title);

        let video_line = Line::from(vec![
            Span::styled(format!(" {icon} "), bold).fg(Color::White),
            Span::styled(title, bold).fg(app.theme.accent_colour),
            Span::raw(" by "),
            Span::styled(video.author.as_str(), bold).fg(app.theme.row_author_fg),
        ]);
        f.render_widget(Paragraph::new(video_line), info_chunks[0]);

        let duration = app.player_duration.unwrap_or(0);
        let time = app.player_time.unwrap_or(0);
        let remaining = duration.saturating_sub(time);

        let time_line = Line::from(vec![
            Span::styled(format_time(time, TimeFormat::Hours), bold).fg(app.theme.accent_colour),
            Span::styled(" / ", bold).fg(Color::White),
            Span::styled(format_time(duration, TimeFormat::Hours), bold)
                .fg(app.theme.accent_colour),
            Span::styled(" (-", bold).fg(Color::White),
            Span::styled(format_time(remaining, TimeFormat::Hours), bold)
                .fg(app.theme.accent_colour),
            Span::styled(")", bold).fg(Color::White),
        ]);
        f.render_widget(
            Paragraph::new(time_line).alignment(Alignment::Right),
            info_chunks[1],
        );
    }

    let volume_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20), Constraint::Length(8)])
        .split(chunks[1]);

    let vol_ratio = (f64::from(app.volume.unwrap_or(0)) / MAX_VOLUME).clamp(0.0, 1.0);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_chunks[1]);

    let volume_icon = if app.muted { ICON_MUTED } else { ICON_VOLUME };
    let volume_label = Paragraph::new(format!(
        " {volume_icon} {}%",
        (vol_ratio * MAX_VOLUME) as u16
    ))
    .alignment(Alignment::Right)
    .fg(Color::White);
    f.render_widget(volume_label, volume_chunks[2]);

    let position = app.player_position.unwrap_or(0.0).clamp(0.0, 1.0);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[3]);
}
