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

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Raw keyboard input is routed through the active components
//! and translated into [`AppEvent`]s; each event is handled to completion,
//! including its persistence writes, before the next one is processed, so
//! there is never a concurrent invocation of two playlist operations.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::SongDraft, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    AddSong(SongDraft),
    RemoveSong(String),
    SelectSong(usize),
    MoveSong { from: usize, to: usize },

    NextSong,
    PreviousSong,
    TogglePlay,

    ToggleTheme,

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::AddSong(draft) => handle_add_song(app, draft),
            AppEvent::RemoveSong(id) => handle_remove_song(app, &id),
            AppEvent::SelectSong(index) => handle_select_song(app, index),
            AppEvent::MoveSong { from, to } => handle_move_song(app, from, to),
            AppEvent::NextSong => handle_next_song(app),
            AppEvent::PreviousSong => handle_previous_song(app),
            AppEvent::TogglePlay => handle_toggle_play(app),
            AppEvent::ToggleTheme => handle_toggle_theme(app),
            _ => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI. The add-song
/// form is modal: while it is open it consumes every key. Otherwise the
/// playlist view gets a chance to act on list navigation and editing keys
/// before the global bindings are consulted.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let handled = app.song_form.handle_event(event.clone(), &app.event_tx)?;
    if handled {
        return Ok(());
    }

    app.playlist_view
        .process_event(event, &app.playlist, &app.event_tx)?;

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(' ') => app.event_tx.send(AppEvent::TogglePlay)?,
        KeyCode::Char('n') => app.event_tx.send(AppEvent::NextSong)?,
        KeyCode::Char('p') => app.event_tx.send(AppEvent::PreviousSong)?,

        KeyCode::Char('t') => app.event_tx.send(AppEvent::ToggleTheme)?,

        _ => {}
    }

    Ok(())
}
