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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's dark and light color palettes and
//! provides utilities for converting colors between Ratatui's internal
//! representation and external formats (such as hexadecimal strings) used
//! for terminal emulator styling.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Which of the two palettes is active. Persisted in the configuration so
/// the choice survives restarts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) mode: ThemeMode,

    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) hint_colour: Color,

    pub(crate) row_highlight_bg: Color,
    pub(crate) row_highlight_fg: Color,

    pub(crate) table_position_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_duration_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::dark_theme()
    }
}

impl Theme {
    pub(crate) fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark_theme(),
            ThemeMode::Light => Self::light_theme(),
        }
    }

    /// Returns the other palette, for the theme toggle.
    pub(crate) fn toggled(&self) -> Self {
        match self.mode {
            ThemeMode::Dark => Self::light_theme(),
            ThemeMode::Light => Self::dark_theme(),
        }
    }

    // Constructs the dark theme.
    pub(crate) const fn dark_theme() -> Self {
        Self {
            mode: ThemeMode::Dark,

            background_colour: Color::Rgb(30, 24, 44),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            hint_colour: Color::Rgb(140, 138, 150),

            row_highlight_bg: Color::Rgb(68, 54, 96),
            row_highlight_fg: Color::Rgb(255, 255, 255),

            table_position_fg: Color::Rgb(162, 161, 166),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(179, 157, 219),
            table_duration_fg: Color::Rgb(162, 161, 166),
        }
    }

    // Constructs the light theme.
    pub(crate) const fn light_theme() -> Self {
        Self {
            mode: ThemeMode::Light,

            background_colour: Color::Rgb(245, 243, 238),
            accent_colour: Color::Rgb(176, 104, 16),
            border_colour: Color::Rgb(150, 150, 150),
            hint_colour: Color::Rgb(120, 118, 110),

            row_highlight_bg: Color::Rgb(215, 205, 235),
            row_highlight_fg: Color::Rgb(20, 20, 20),

            table_position_fg: Color::Rgb(110, 108, 104),
            table_title_fg: Color::Rgb(20, 20, 20),
            table_artist_fg: Color::Rgb(86, 62, 140),
            table_duration_fg: Color::Rgb(110, 108, 104),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Arguments
    ///
    /// * `colour` - The Ratatui color to convert. Must be an `Rgb` variant.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}
