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

//! Stateful UI components.
//!
//! Each component owns its transient view state (cursor position, input
//! buffers, focus) and translates keyboard input into [`AppEvent`]s. None of
//! them mutate the playlist directly; the event handlers are the single
//! writer path.
//!
//! [`AppEvent`]: crate::events::AppEvent

mod playlist;
mod song_form;

pub(crate) use playlist::PlaylistView;
pub(crate) use song_form::SongForm;
