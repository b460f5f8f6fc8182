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

use crate::{App, config, model::SongDraft, theme::Theme, util};

pub(super) fn handle_add_song(app: &mut App, draft: SongDraft) {
    app.playlist.add_song(draft);
    app.playlist_view.clamp_cursor(app.playlist.songs().len());
}

pub(super) fn handle_remove_song(app: &mut App, id: &str) {
    app.playlist.remove_song(id);
    app.playlist_view.clamp_cursor(app.playlist.songs().len());
}

pub(super) fn handle_select_song(app: &mut App, index: usize) {
    app.playlist.set_current_song(index);
}

pub(super) fn handle_move_song(app: &mut App, from: usize, to: usize) {
    app.playlist.reorder_songs(from, to);
    // Keep the view cursor on the song that was just moved.
    if to < app.playlist.songs().len() {
        app.playlist_view.select(to);
    }
}

pub(super) fn handle_next_song(app: &mut App) {
    app.playlist.next_song();
}

pub(super) fn handle_previous_song(app: &mut App) {
    app.playlist.previous_song();
}

pub(super) fn handle_toggle_play(app: &mut App) {
    app.playlist.toggle_play();
}

pub(super) fn handle_toggle_theme(app: &mut App) {
    app.theme = app.theme.toggled();
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    app.config.theme = app.theme.mode;
    if let Err(e) = config::save_config(&app.config) {
        log::warn!("Failed to save theme preference: {e}");
    }
}

pub(super) fn handle_tick(_app: &mut App) {}
