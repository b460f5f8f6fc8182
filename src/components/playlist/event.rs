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

//! Event routing for the playlist view.
//!
//! Navigation keys move the cursor locally; editing keys are translated
//! into [`AppEvent`]s so the playlist mutation happens on the single writer
//! path. Move events are only emitted when the target slot exists.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{components::PlaylistView, events::AppEvent, model::playlist::Playlist};

impl PlaylistView {
    pub(crate) fn process_event(
        &mut self,
        event: Event,
        playlist: &Playlist,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };

        let len = playlist.songs().len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),

            KeyCode::Enter => {
                if let Some(index) = self.cursor() {
                    event_tx.send(AppEvent::SelectSong(index))?;
                }
            }

            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(index) = self.cursor() {
                    if let Some(song) = playlist.songs().get(index) {
                        event_tx.send(AppEvent::RemoveSong(song.id.clone()))?;
                    }
                }
            }

            // Shift-J/K move the song under the cursor one slot.
            KeyCode::Char('J') => {
                if let Some(index) = self.cursor() {
                    if index + 1 < len {
                        event_tx.send(AppEvent::MoveSong {
                            from: index,
                            to: index + 1,
                        })?;
                    }
                }
            }
            KeyCode::Char('K') => {
                if let Some(index) = self.cursor() {
                    if index > 0 {
                        event_tx.send(AppEvent::MoveSong {
                            from: index,
                            to: index - 1,
                        })?;
                    }
                }
            }

            _ => {}
        }

        Ok(())
    }
}
