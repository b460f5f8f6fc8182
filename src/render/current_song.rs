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

//! Render the current song panel.
//!
//! This module renders the visual representation of the currently selected
//! song: its title, artist and optional duration, its position in the list,
//! and the play/pause state.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_PAUSE, ICON_PLAY},
};

/// Renders the current-song panel at the bottom of the screen.
pub(crate) fn draw_current_song(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    let Some(song) = app.playlist.current_song() else {
        let empty = Paragraph::new("Playlist is empty, press 'a' to add a song")
            .style(Style::default().fg(app.theme.hint_colour));
        f.render_widget(empty, chunks[0]);
        return;
    };

    let icon = if app.playlist.is_playing() { ICON_PLAY } else { ICON_PAUSE };

    let mut spans = vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD))
            .fg(Color::White),
        Span::styled(&song.title, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
        Span::raw(" by "),
        Span::styled(&song.artist, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
    ];
    if let Some(duration) = &song.duration {
        spans.push(Span::raw(" ("));
        spans.push(Span::styled(duration, Style::default().fg(app.theme.accent_colour)));
        spans.push(Span::raw(")"));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let position = format!(
        "   Song {} of {}",
        app.playlist.current_index() + 1,
        app.playlist.songs().len()
    );
    let position_line =
        Paragraph::new(position).style(Style::default().fg(app.theme.hint_colour));
    f.render_widget(position_line, chunks[1]);
}
