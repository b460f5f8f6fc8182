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

//! Event routing for the add-song form.
//!
//! While the form is open it consumes every key event. `Tab`/`BackTab`
//! cycle the focused field, `Enter` submits when the draft validates,
//! `Esc` discards, and everything else is delegated to the focused text
//! input component.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::SongForm, events::AppEvent};

impl SongForm {
    /// Handles a terminal event, returning `true` when the event was
    /// consumed by the form.
    pub(crate) fn handle_event(
        &mut self,
        event: Event,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char('a') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.reset();
                self.active = false;
            }

            KeyCode::Tab => self.focus = self.focus().next(),
            KeyCode::BackTab => self.focus = self.focus().previous(),

            KeyCode::Enter => {
                // An incomplete form stays open, nothing is submitted.
                if let Some(draft) = self.draft() {
                    event_tx.send(AppEvent::AddSong(draft))?;
                    self.reset();
                    self.active = false;
                }
            }

            _ => {
                // Delegate all other key events to the focused input.
                self.focused_input_mut().handle_event(&event);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{Event, KeyCode, KeyEvent};

    use crate::{components::SongForm, events::AppEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn type_text(form: &mut SongForm, text: &str, tx: &mpsc::Sender<AppEvent>) {
        for c in text.chars() {
            form.handle_event(key(KeyCode::Char(c)), tx).unwrap();
        }
    }

    #[test]
    fn opens_on_a_and_consumes_keys_while_active() {
        let (tx, _rx) = mpsc::channel();
        let mut form = SongForm::new();

        assert!(!form.handle_event(key(KeyCode::Char('x')), &tx).unwrap());
        assert!(form.handle_event(key(KeyCode::Char('a')), &tx).unwrap());
        assert!(form.active());

        // While open, even unbound keys are consumed.
        assert!(form.handle_event(key(KeyCode::Char('q')), &tx).unwrap());
    }

    #[test]
    fn blank_title_or_artist_does_not_submit() {
        let (tx, rx) = mpsc::channel();
        let mut form = SongForm::new();
        form.handle_event(key(KeyCode::Char('a')), &tx).unwrap();

        type_text(&mut form, "   ", &tx);
        form.handle_event(key(KeyCode::Enter), &tx).unwrap();

        assert!(rx.try_recv().is_err());
        assert!(form.active());
    }

    #[test]
    fn submit_trims_fields_and_closes_the_form() {
        let (tx, rx) = mpsc::channel();
        let mut form = SongForm::new();
        form.handle_event(key(KeyCode::Char('a')), &tx).unwrap();

        type_text(&mut form, " My Song ", &tx);
        form.handle_event(key(KeyCode::Tab), &tx).unwrap();
        type_text(&mut form, "The Artist", &tx);
        form.handle_event(key(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::AddSong(draft) => {
                assert_eq!(draft.title, "My Song");
                assert_eq!(draft.artist, "The Artist");
                assert_eq!(draft.duration, None);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(!form.active());
        assert_eq!(form.title.value(), "");
    }

    #[test]
    fn escape_discards_the_draft() {
        let (tx, rx) = mpsc::channel();
        let mut form = SongForm::new();
        form.handle_event(key(KeyCode::Char('a')), &tx).unwrap();

        type_text(&mut form, "Song", &tx);
        form.handle_event(key(KeyCode::Esc), &tx).unwrap();

        assert!(!form.active());
        assert_eq!(form.title.value(), "");
        assert!(rx.try_recv().is_err());
    }
}
