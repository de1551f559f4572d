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

//! Drawing of the playlist view.
//!
//! A header line summarises the current search, then every row of the model
//! is drawn as a list item: one per video plus the status row while it is
//! visible.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::PlaylistView,
    model::Video,
    playlist::{PlaylistModel, RowKind},
    render::icons::{ICON_ARTWORK, ICON_PLAY, ICON_SEARCHING, SELECTED_MARK},
    theme::Theme,
    util::format::format_duration,
};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, playlist: &PlaylistModel, theme: &Theme) {
        let suggestions_height = if self.suggestions.is_empty() { 0 } else { 1 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(suggestions_height),
            ])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(self.header_text(playlist)).block(header_block);
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = (0..playlist.row_count())
            .filter_map(|row| match playlist.row_kind(row)? {
                RowKind::Video => {
                    let video = playlist.video_at(row)?;
                    Some(self.video_item(row, video, playlist, theme))
                }
                RowKind::Status => Some(status_item(row, playlist, theme)),
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        if !self.suggestions.is_empty() {
            let line = Line::from(vec![
                Span::styled(" Also try: ", Style::default().fg(theme.row_status_fg)),
                Span::styled(
                    self.suggestions.join(", "),
                    Style::default().fg(theme.row_author_fg),
                ),
            ]);
            f.render_widget(Paragraph::new(line), chunks[2]);
        }
    }

    fn header_text(&self, playlist: &PlaylistModel) -> String {
        let description = match playlist.search_params() {
            Some(params) if !params.author.is_empty() => format!("channel {}", params.author),
            Some(params) if !params.keywords.is_empty() => format!("\"{}\"", params.keywords),
            _ => "all videos".to_string(),
        };

        let mut text = format!("Playlist | {} | {} videos", description, playlist.len());

        if playlist.is_searching() {
            let _ = write!(text, " {ICON_SEARCHING}");
        }

        let selected = self.selected_count();
        if selected > 0 {
            let _ = write!(text, " | {selected} selected");
        }

        if let Some(clipboard) = self.clipboard() {
            let _ = write!(text, " | {} cut", clipboard.len());
        }

        text
    }

    fn video_item<'a>(
        &self,
        row: usize,
        video: &'a Video,
        playlist: &PlaylistModel,
        theme: &Theme,
    ) -> ListItem<'a> {
        let active = playlist.is_active(row);

        let marker = if active { ICON_PLAY } else { " " };
        let selected = if self.is_selected(video.id) { SELECTED_MARK } else { " " };
        let artwork = if video.thumbnail_loaded() { ICON_ARTWORK } else { " " };

        let title_style = if active {
            Style::default().fg(theme.row_active_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.row_title_fg)
        };

        let mut author_style = Style::default().fg(theme.row_author_fg);
        if playlist.is_hovered(row) && playlist.author_hovered() {
            author_style = author_style.add_modifier(Modifier::UNDERLINED);
            if playlist.author_pressed() {
                author_style = author_style.add_modifier(Modifier::REVERSED);
            }
        }

        let mut style = Style::default();
        if self.is_selected(video.id) {
            style = style.bg(theme.row_selected_bg);
        }

        ListItem::new(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(theme.row_active_fg)),
            Span::styled(format!("{selected} "), Style::default().fg(theme.accent_colour)),
            Span::raw(format!("{artwork} ")),
            Span::styled(video.title.as_str(), title_style),
            Span::styled(" by ", Style::default().fg(theme.row_time_fg)),
            Span::styled(video.author.as_str(), author_style),
            Span::styled(
                format!("  {}", format_duration(video.duration)),
                Style::default().fg(theme.row_time_fg),
            ),
        ]))
        .style(style)
    }
}

fn status_item(row: usize, playlist: &PlaylistModel, theme: &Theme) -> ListItem<'static> {
    let colour = if playlist.status_is_error() {
        theme.error_colour
    } else {
        theme.row_status_fg
    };

    ListItem::new(Line::from(Span::styled(
        format!("    {}", playlist.display_text(row).unwrap_or_default()),
        Style::default().fg(colour).add_modifier(Modifier::ITALIC),
    )))
}
