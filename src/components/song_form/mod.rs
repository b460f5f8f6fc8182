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

//! Add-song form state and input management.
//!
//! This module implements the modal form for adding a song to the playlist:
//! three text input components (title, artist, optional duration), focus
//! cycling, and submit validation. Validation lives here, not in the
//! playlist: a submission only becomes a [`SongDraft`] when the trimmed
//! title and artist are non-empty.

mod event;
mod render;

use tui_input::Input;

use crate::model::SongDraft;

#[derive(Clone, Copy, PartialEq)]
pub(crate) enum FormField {
    Title,
    Artist,
    Duration,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Artist,
            FormField::Artist => FormField::Duration,
            FormField::Duration => FormField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Duration,
            FormField::Artist => FormField::Title,
            FormField::Duration => FormField::Artist,
        }
    }
}

pub(crate) struct SongForm {
    active: bool,
    focus: FormField,
    pub(crate) title: Input,
    pub(crate) artist: Input,
    pub(crate) duration: Input,
}

impl SongForm {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            focus: FormField::Title,
            title: Input::default(),
            artist: Input::default(),
            duration: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn focus(&self) -> FormField {
        self.focus
    }

    pub(crate) fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Title => &self.title,
            FormField::Artist => &self.artist,
            FormField::Duration => &self.duration,
        }
    }

    fn focused_input_mut(&mut self) -> &mut Input {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Artist => &mut self.artist,
            FormField::Duration => &mut self.duration,
        }
    }

    /// Builds the draft for the current field values, or `None` when the
    /// trimmed title or artist is empty. A blank duration becomes `None`.
    fn draft(&self) -> Option<SongDraft> {
        let title = self.title.value().trim();
        let artist = self.artist.value().trim();
        if title.is_empty() || artist.is_empty() {
            return None;
        }

        let duration = self.duration.value().trim();

        Some(SongDraft {
            title: title.to_string(),
            artist: artist.to_string(),
            duration: (!duration.is_empty()).then(|| duration.to_string()),
        })
    }

    fn reset(&mut self) {
        self.title.reset();
        self.artist.reset();
        self.duration.reset();
        self.focus = FormField::Title;
    }
}
