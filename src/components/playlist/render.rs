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

//! UI rendering logic for the playlist view.
//!
//! This module handles the visual representation of the song list: a themed
//! table with a header line, a play/pause marker on the row holding the
//! current song, and a highlight on the cursor row.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::PlaylistView,
    model::playlist::Playlist,
    render::icons::{ICON_PAUSE, ICON_PLAY},
    theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, playlist: &Playlist, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header_text = format!("Playlist | {} songs", playlist.songs().len());
        let header = Paragraph::new(header_text).block(header_block);

        f.render_widget(header, chunks[0]);
        self.draw_table(f, chunks[1], playlist, theme);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, playlist: &Playlist, theme: &Theme) {
        let current_index = playlist.current_index();

        let rows = playlist.songs().iter().enumerate().map(|(i, song)| {
            let marker = if i == current_index {
                let icon = if playlist.is_playing() { ICON_PLAY } else { ICON_PAUSE };
                Line::from(icon).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let position = format!("{:02}", i + 1);
            let duration = song.duration.as_deref().unwrap_or("");

            Row::new(vec![
                Cell::from(marker),
                Cell::from(
                    Line::from(position)
                        .style(Style::default().fg(theme.table_position_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(song.title.as_str())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(song.artist.as_str())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
                Cell::from(
                    Line::from(duration)
                        .style(Style::default().fg(theme.table_duration_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Percentage(45),
                Constraint::Percentage(35),
                Constraint::Length(9),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from(Line::from("Duration").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme.row_highlight_bg)
                .fg(theme.row_highlight_fg),
        )
        .block(Block::default().padding(Padding::horizontal(1)));

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
