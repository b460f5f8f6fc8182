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

//! Playlist view state.
//!
//! This module manages the cursor over the song table. The cursor is pure
//! view state, independent of the playlist's current song; it identifies the
//! row that editing keys (select, remove, move) act upon.

mod event;
mod render;

use ratatui::widgets::TableState;

pub(crate) struct PlaylistView {
    pub(crate) table_state: TableState,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn select(&mut self, index: usize) {
        self.table_state.select(Some(index));
    }

    /// Keeps the cursor on a valid row after the list length changed.
    pub(crate) fn clamp_cursor(&mut self, len: usize) {
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None if len > 0 => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut view = PlaylistView::new();

        view.goto_next(3);
        assert_eq!(view.cursor(), Some(0));

        view.goto_previous(3);
        assert_eq!(view.cursor(), Some(2));

        view.goto_next(3);
        assert_eq!(view.cursor(), Some(0));
    }

    #[test]
    fn cursor_clamps_after_shrink() {
        let mut view = PlaylistView::new();
        view.select(2);

        view.clamp_cursor(2);
        assert_eq!(view.cursor(), Some(1));

        view.clamp_cursor(0);
        assert_eq!(view.cursor(), None);
    }

    #[test]
    fn cursor_appears_on_first_add() {
        let mut view = PlaylistView::new();
        assert_eq!(view.cursor(), None);

        view.clamp_cursor(1);
        assert_eq!(view.cursor(), Some(0));
    }
}
