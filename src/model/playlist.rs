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

//! Playlist state management.
//!
//! This module provides the single owner of playlist state: the ordered song
//! list, the index of the currently selected song, and the play/pause flag.
//! All mutations go through the methods here, and each mutation ends with a
//! synchronous write of the affected state to the injected key-value store.
//!
//! No operation raises an error to its caller. Boundary conditions degrade
//! to no-ops or clamped values, and a failed persistence write is logged
//! while the in-memory state remains authoritative.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngExt, distr::Alphanumeric, rng};

use crate::{
    model::{Song, SongDraft},
    storage::{CURRENT_INDEX_KEY, KeyValueStore, PLAYLIST_KEY},
};

pub(crate) struct Playlist {
    songs: Vec<Song>,
    current_index: usize,
    is_playing: bool,
    store: Box<dyn KeyValueStore>,
}

impl Playlist {
    /// Restores the playlist from the given store.
    ///
    /// The song list is read from the playlist key as JSON and the selection
    /// from the index key as decimal text. Missing or malformed values fail
    /// open to an empty list and index 0; loading never returns an error.
    ///
    /// A persisted index that no longer fits the loaded list (for example
    /// after the stored data was edited externally) is clamped to the last
    /// song so the selection always resolves to a valid element.
    pub(crate) fn load(store: Box<dyn KeyValueStore>) -> Self {
        let songs: Vec<Song> = store
            .get(PLAYLIST_KEY)
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();

        let mut current_index = store
            .get(CURRENT_INDEX_KEY)
            .and_then(|text| text.trim().parse::<usize>().ok())
            .unwrap_or(0);

        if songs.is_empty() {
            current_index = 0;
        } else if current_index >= songs.len() {
            current_index = songs.len() - 1;
        }

        Self {
            songs,
            current_index,
            is_playing: false,
            store,
        }
    }

    /// Appends a new song to the end of the playlist.
    ///
    /// A fresh unique id is assigned here; the selection and the play flag
    /// are left untouched.
    pub(crate) fn add_song(&mut self, draft: SongDraft) {
        let song = Song {
            id: new_song_id(),
            title: draft.title,
            artist: draft.artist,
            duration: draft.duration,
        };
        self.songs.push(song);

        self.persist_songs();
    }

    /// Removes the song with the given id, if present.
    ///
    /// Removing an unknown id is a no-op. The selection is re-derived so it
    /// still resolves to a valid element:
    ///
    /// * a song before the current one shifts the selection left,
    /// * removing the current song keeps the selection on the same slot,
    ///   clamped to the new last song when the removed one was last,
    /// * emptying the list resets the selection and stops playback.
    pub(crate) fn remove_song(&mut self, id: &str) {
        let Some(removed_index) = self.songs.iter().position(|song| song.id == id) else {
            return;
        };
        self.songs.remove(removed_index);

        if self.songs.is_empty() {
            self.set_current_index(0);
            self.is_playing = false;
        } else if removed_index < self.current_index {
            self.set_current_index(self.current_index.saturating_sub(1));
        } else if removed_index == self.current_index {
            self.set_current_index(self.current_index.min(self.songs.len() - 1));
        }

        self.persist_songs();
    }

    /// Selects the song at `index` and starts playing.
    ///
    /// An out-of-range index is a silent no-op.
    pub(crate) fn set_current_song(&mut self, index: usize) {
        if index < self.songs.len() {
            self.set_current_index(index);
            self.is_playing = true;
        }
    }

    /// Advances the selection, wrapping to the first song after the last.
    ///
    /// No-op on an empty list. The play flag is not altered.
    pub(crate) fn next_song(&mut self) {
        if !self.songs.is_empty() {
            self.set_current_index((self.current_index + 1) % self.songs.len());
        }
    }

    /// Moves the selection back, wrapping to the last song before the first.
    ///
    /// No-op on an empty list. The play flag is not altered.
    pub(crate) fn previous_song(&mut self) {
        if !self.songs.is_empty() {
            let len = self.songs.len();
            self.set_current_index((self.current_index + len - 1) % len);
        }
    }

    /// Flips the play/pause flag. Always succeeds, even on an empty list.
    pub(crate) fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Moves the song at `from_index` so it ends up at `to_index`.
    ///
    /// Splice-move semantics: the song is removed first and reinserted into
    /// the shifted list. Out-of-range indices are a silent no-op. The
    /// selection follows the current song when it is the one moved, and
    /// shifts by one slot when a song crosses over it.
    pub(crate) fn reorder_songs(&mut self, from_index: usize, to_index: usize) {
        if from_index >= self.songs.len() || to_index >= self.songs.len() {
            return;
        }
        let song = self.songs.remove(from_index);
        self.songs.insert(to_index, song);

        if from_index == self.current_index {
            self.set_current_index(to_index);
        } else if from_index < self.current_index && to_index >= self.current_index {
            self.set_current_index(self.current_index - 1);
        } else if from_index > self.current_index && to_index <= self.current_index {
            self.set_current_index(self.current_index + 1);
        }

        self.persist_songs();
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn current_song(&self) -> Option<&Song> {
        self.songs.get(self.current_index)
    }

    // The index key is only rewritten when the value actually changes; the
    // play flag is deliberately not persisted.
    fn set_current_index(&mut self, index: usize) {
        if self.current_index != index {
            self.current_index = index;
            self.persist_index();
        }
    }

    fn persist_songs(&mut self) {
        match serde_json::to_string(&self.songs) {
            Ok(json) => {
                if let Err(e) = self.store.set(PLAYLIST_KEY, &json) {
                    log::warn!("Failed to persist playlist: {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize playlist: {e}"),
        }
    }

    fn persist_index(&mut self) {
        let value = self.current_index.to_string();
        if let Err(e) = self.store.set(CURRENT_INDEX_KEY, &value) {
            log::warn!("Failed to persist current index: {e}");
        }
    }
}

/// Generates an opaque unique song id.
///
/// Milliseconds since the epoch plus a short random alphanumeric suffix, so
/// ids stay unique even when several songs are added in the same instant.
fn new_song_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let suffix: String = rng()
        .sample_iter(Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();

    format!("{millis}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn draft(title: &str) -> SongDraft {
        SongDraft {
            title: title.to_string(),
            artist: "Artist".to_string(),
            duration: None,
        }
    }

    fn playlist_of(titles: &[&str]) -> Playlist {
        let mut playlist = Playlist::load(Box::new(MemoryStore::new()));
        for title in titles {
            playlist.add_song(draft(title));
        }
        playlist
    }

    fn titles(playlist: &Playlist) -> Vec<String> {
        playlist.songs().iter().map(|s| s.title.clone()).collect()
    }

    fn id_at(playlist: &Playlist, index: usize) -> String {
        playlist.songs()[index].id.clone()
    }

    #[test]
    fn add_appends_without_touching_selection() {
        let mut playlist = playlist_of(&["A"]);
        playlist.set_current_song(0);
        playlist.toggle_play();
        assert!(!playlist.is_playing());

        playlist.add_song(draft("B"));

        assert_eq!(titles(&playlist), ["A", "B"]);
        assert_eq!(playlist.current_index(), 0);
        assert!(!playlist.is_playing());
    }

    #[test]
    fn added_songs_have_distinct_ids() {
        let playlist = playlist_of(&["A", "B", "C"]);
        let ids: std::collections::HashSet<_> =
            playlist.songs().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), playlist.songs().len());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut playlist = playlist_of(&["A", "B"]);
        let id = id_at(&playlist, 0);

        playlist.remove_song(&id);
        assert_eq!(titles(&playlist), ["B"]);

        playlist.remove_song(&id);
        assert_eq!(titles(&playlist), ["B"]);
        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn remove_before_current_shifts_selection_left() {
        let mut playlist = playlist_of(&["A", "B", "C"]);
        playlist.set_current_song(2);

        let id = id_at(&playlist, 0);
        playlist.remove_song(&id);

        assert_eq!(titles(&playlist), ["B", "C"]);
        assert_eq!(playlist.current_index(), 1);
        assert_eq!(playlist.current_song().unwrap().title, "C");
    }

    #[test]
    fn remove_current_keeps_selection_on_slot() {
        let mut playlist = playlist_of(&["A", "B", "C"]);
        playlist.set_current_song(1);

        let id = id_at(&playlist, 1);
        playlist.remove_song(&id);

        assert_eq!(titles(&playlist), ["A", "C"]);
        assert_eq!(playlist.current_index(), 1);
        assert_eq!(playlist.current_song().unwrap().title, "C");
    }

    #[test]
    fn remove_current_last_clamps_to_new_last() {
        let mut playlist = playlist_of(&["A", "B", "C"]);
        playlist.set_current_song(2);

        let id = id_at(&playlist, 2);
        playlist.remove_song(&id);

        assert_eq!(titles(&playlist), ["A", "B"]);
        assert_eq!(playlist.current_index(), 1);
    }

    #[test]
    fn remove_after_current_leaves_selection() {
        let mut playlist = playlist_of(&["A", "B", "C"]);
        playlist.set_current_song(0);

        let id = id_at(&playlist, 2);
        playlist.remove_song(&id);

        assert_eq!(titles(&playlist), ["A", "B"]);
        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn remove_to_empty_resets_selection_and_stops() {
        let mut playlist = playlist_of(&["A"]);
        playlist.set_current_song(0);
        assert!(playlist.is_playing());

        let id = id_at(&playlist, 0);
        playlist.remove_song(&id);

        assert!(playlist.songs().is_empty());
        assert_eq!(playlist.current_index(), 0);
        assert!(!playlist.is_playing());
    }

    #[test]
    fn set_current_song_selects_and_plays() {
        let mut playlist = playlist_of(&["A", "B"]);

        playlist.set_current_song(1);

        assert_eq!(playlist.current_index(), 1);
        assert!(playlist.is_playing());
    }

    #[test]
    fn set_current_song_out_of_range_is_noop() {
        let mut playlist = playlist_of(&["A", "B"]);

        playlist.set_current_song(2);

        assert_eq!(playlist.current_index(), 0);
        assert!(!playlist.is_playing());
    }

    #[test]
    fn next_wraps_back_to_start() {
        let mut playlist = playlist_of(&["A", "B", "C"]);
        playlist.set_current_song(1);

        for _ in 0..playlist.songs().len() {
            playlist.next_song();
        }

        assert_eq!(playlist.current_index(), 1);
    }

    #[test]
    fn previous_wraps_back_to_start() {
        let mut playlist = playlist_of(&["A", "B", "C"]);
        playlist.set_current_song(1);

        for _ in 0..playlist.songs().len() {
            playlist.previous_song();
        }

        assert_eq!(playlist.current_index(), 1);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut playlist = playlist_of(&["A", "B", "C"]);

        playlist.previous_song();

        assert_eq!(playlist.current_index(), 2);
    }

    #[test]
    fn next_and_previous_on_empty_are_noops() {
        let mut playlist = playlist_of(&[]);

        playlist.next_song();
        playlist.previous_song();

        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn stepping_does_not_alter_play_flag() {
        let mut playlist = playlist_of(&["A", "B"]);
        assert!(!playlist.is_playing());

        playlist.next_song();
        assert!(!playlist.is_playing());

        playlist.set_current_song(0);
        playlist.previous_song();
        assert!(playlist.is_playing());
    }

    #[test]
    fn toggle_play_flips_even_when_empty() {
        let mut playlist = playlist_of(&[]);

        playlist.toggle_play();
        assert!(playlist.is_playing());

        playlist.toggle_play();
        assert!(!playlist.is_playing());
    }

    #[test]
    fn reorder_moves_current_song_with_selection() {
        let mut playlist = playlist_of(&["A", "B", "C", "D"]);
        playlist.set_current_song(0);

        playlist.reorder_songs(0, 2);

        assert_eq!(titles(&playlist), ["B", "C", "A", "D"]);
        assert_eq!(playlist.current_index(), 2);
        assert_eq!(playlist.current_song().unwrap().title, "A");
    }

    #[test]
    fn reorder_over_current_shifts_selection_left() {
        let mut playlist = playlist_of(&["A", "B", "C", "D"]);
        playlist.set_current_song(2);

        playlist.reorder_songs(0, 2);

        assert_eq!(titles(&playlist), ["B", "C", "A", "D"]);
        assert_eq!(playlist.current_index(), 1);
        assert_eq!(playlist.current_song().unwrap().title, "C");
    }

    #[test]
    fn reorder_over_current_shifts_selection_right() {
        let mut playlist = playlist_of(&["A", "B", "C", "D"]);
        playlist.set_current_song(1);

        playlist.reorder_songs(3, 0);

        assert_eq!(titles(&playlist), ["D", "A", "B", "C"]);
        assert_eq!(playlist.current_index(), 2);
        assert_eq!(playlist.current_song().unwrap().title, "B");
    }

    #[test]
    fn reorder_away_from_current_leaves_selection() {
        let mut playlist = playlist_of(&["A", "B", "C", "D"]);
        playlist.set_current_song(0);

        playlist.reorder_songs(2, 3);

        assert_eq!(titles(&playlist), ["A", "B", "D", "C"]);
        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn reorder_out_of_range_is_noop() {
        let mut playlist = playlist_of(&["A", "B", "C"]);
        playlist.set_current_song(1);

        playlist.reorder_songs(0, 3);
        playlist.reorder_songs(3, 0);

        assert_eq!(titles(&playlist), ["A", "B", "C"]);
        assert_eq!(playlist.current_index(), 1);
    }

    #[test]
    fn state_round_trips_through_the_store() {
        let store = MemoryStore::new();

        let mut playlist = Playlist::load(Box::new(store.clone()));
        playlist.add_song(SongDraft {
            title: "A".to_string(),
            artist: "First".to_string(),
            duration: Some("3:45".to_string()),
        });
        playlist.add_song(draft("B"));
        playlist.set_current_song(1);
        let saved = playlist.songs().to_vec();

        let reloaded = Playlist::load(Box::new(store));

        assert_eq!(reloaded.songs(), saved.as_slice());
        assert_eq!(reloaded.current_index(), 1);
        // The play flag is session state and is not persisted.
        assert!(!reloaded.is_playing());
    }

    #[test]
    fn malformed_persisted_data_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(PLAYLIST_KEY, "not json at all").unwrap();
        store.set(CURRENT_INDEX_KEY, "twelve").unwrap();

        let playlist = Playlist::load(Box::new(store));

        assert!(playlist.songs().is_empty());
        assert_eq!(playlist.current_index(), 0);
        assert!(!playlist.is_playing());
    }

    #[test]
    fn stale_persisted_index_is_clamped() {
        let store = MemoryStore::new();

        let mut playlist = Playlist::load(Box::new(store.clone()));
        playlist.add_song(draft("A"));
        playlist.add_song(draft("B"));

        let mut seeded = store.clone();
        seeded.set(CURRENT_INDEX_KEY, "9").unwrap();

        let reloaded = Playlist::load(Box::new(store));

        assert_eq!(reloaded.current_index(), 1);
    }
}
