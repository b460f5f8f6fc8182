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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event (and on every tick) to provide a reactive user
//! interface.

mod current_song;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, render::current_song::draw_current_song};

const KEY_HINTS: &str =
    " a add | d remove | J/K move | Enter select | Space play/pause | n/p step | t theme | q quit";

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`]:
///
/// * the playlist table,
/// * the current-song panel,
/// * a footer with key hints,
/// * the add-song form popup, drawn on top when open.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: playlist, current song panel, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    app.playlist_view
        .draw(f, outer[0], &app.playlist, &app.theme);

    draw_current_song(f, outer[1], app);

    let footer = Paragraph::new(KEY_HINTS).style(Style::default().fg(app.theme.hint_colour));
    f.render_widget(footer, outer[2]);

    if app.song_form.active() {
        app.song_form.draw(f, area, &app.theme);
    }
}
