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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::{RecentView, recent::RecentEntry},
    theme::Theme,
};

impl RecentView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(format!("Recent searches | {}", self.entries.len()))
            .block(header_block);
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let (kind, colour) = match entry {
                    RecentEntry::Keyword(_) => ("search ", theme.row_title_fg),
                    RecentEntry::Channel(_) => ("channel", theme.row_author_fg),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{kind}  "), Style::default().fg(theme.row_time_fg)),
                    Span::styled(entry.label(), Style::default().fg(colour)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
