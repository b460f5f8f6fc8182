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

//! UI rendering logic for the add-song form.
//!
//! The form is drawn as a centered popup over the playlist, one row per
//! field, with the terminal cursor placed inside the focused input.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{
    components::{SongForm, song_form::FormField},
    theme::Theme,
};

const FORM_WIDTH: u16 = 46;
const FORM_HEIGHT: u16 = 7;
const LABEL_WIDTH: u16 = 10;

const FIELDS: [(FormField, &str); 3] = [
    (FormField::Title, "Title"),
    (FormField::Artist, "Artist"),
    (FormField::Duration, "Duration"),
];

impl SongForm {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = popup_area(area);

        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Add Song ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        for (row, (field, label)) in FIELDS.iter().enumerate() {
            let focused = self.focus() == *field;
            let input = self.input(*field);

            let label_style = if focused {
                Style::default().bold().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.hint_colour)
            };

            let line = Line::from(vec![
                Span::styled(format!("{label:<width$}", width = LABEL_WIDTH as usize), label_style),
                Span::raw(input.value()),
            ]);
            f.render_widget(Paragraph::new(line), rows[row]);

            if focused {
                let cursor_x = rows[row].x + LABEL_WIDTH + input.cursor() as u16;
                f.set_cursor_position((cursor_x, rows[row].y));
            }
        }

        let hint = Paragraph::new("Enter add | Tab next field | Esc cancel")
            .style(Style::default().fg(theme.hint_colour));
        f.render_widget(hint, rows[4]);
    }
}

// Fixed-size popup centered in the available area, shrunk when the terminal
// is smaller than the form.
fn popup_area(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = FORM_HEIGHT.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
