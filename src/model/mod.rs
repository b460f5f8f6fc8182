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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the songs
//! held by the playlist and the draft records produced by the add-song form,
//! representing the data shape used for display and persistence.

pub(crate) mod playlist;

use serde::{Deserialize, Serialize};

/// A single entry in the playlist.
///
/// The `id` is assigned once when the song is added and is never reused; it
/// is the handle other layers use to refer to the song regardless of its
/// position in the list. The serialized form matches the persisted playlist
/// key, with `duration` omitted entirely when not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Free-form text such as "3:45", no format is enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// A validated song submission from the add-song form.
///
/// The form guarantees `title` and `artist` are trimmed and non-empty before
/// a draft is constructed; the playlist does not re-validate them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SongDraft {
    pub title: String,
    pub artist: String,
    pub duration: Option<String>,
}
