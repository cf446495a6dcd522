//! Ordered playlist with its current-entry cursor.
//!
//! [`PlaylistStore`] is the single owner of playlist entries and the only place the
//! cursor is mutated. Every mutating method re-establishes the cursor invariant
//! before returning:
//!
//! - empty playlist: cursor is `0`
//! - non-empty playlist: `0 <= cursor < len`
//!
//! The store never touches playback handles. Operations that change which entry is
//! current report what happened so the caller can restart or stop playback.

use crate::domain::{classify, is_acceptable, CandidateFile, MediaEntry};

/// What a [`PlaylistStore::remove_at`] call did to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Index was out of range; nothing changed.
    Ignored,
    /// The last remaining entry was removed; the store is now empty.
    Emptied,
    /// The current entry was removed; the cursor now points at its successor
    /// (or at the new last entry) and playback must restart there.
    CurrentReplaced { cursor: usize },
    /// An entry before the cursor was removed; the cursor moved down by one and
    /// still designates the same entry.
    CursorShifted { cursor: usize },
    /// An entry after the cursor was removed; the cursor is unchanged.
    Unaffected,
}

/// Ordered sequence of media entries plus the current-index cursor.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    entries: Vec<MediaEntry>,
    cursor: usize,
}

impl PlaylistStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaEntry> {
        self.entries.get(index)
    }

    /// The entry under the cursor, `None` when the playlist is empty.
    #[must_use]
    pub fn current(&self) -> Option<&MediaEntry> {
        self.entries.get(self.cursor)
    }

    /// Admits a batch of candidate files, appending the accepted ones in order.
    ///
    /// Files whose names do not classify as video, audio, or image are dropped
    /// silently. Returns the number of entries appended.
    pub fn append<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = CandidateFile>,
    {
        let before = self.entries.len();

        for file in files {
            if !is_acceptable(&file.name) {
                tracing::debug!(name = %file.name, "unsupported file skipped");
                continue;
            }
            let kind = classify(&file.name);
            self.entries.push(MediaEntry::new(file.name, kind, file.blob));
        }

        let appended = self.entries.len() - before;
        tracing::debug!(appended, total = self.entries.len(), "batch appended");
        self.check_invariants();
        appended
    }

    /// Removes the entry at `index`, keeping the cursor on the same logical entry
    /// where possible.
    pub fn remove_at(&mut self, index: usize) -> Removal {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "remove index out of range");
            return Removal::Ignored;
        }

        if self.entries.len() == 1 {
            self.clear();
            return Removal::Emptied;
        }

        self.entries.remove(index);

        let removal = match index.cmp(&self.cursor) {
            std::cmp::Ordering::Less => {
                self.cursor -= 1;
                Removal::CursorShifted { cursor: self.cursor }
            }
            std::cmp::Ordering::Equal => {
                if self.cursor >= self.entries.len() {
                    self.cursor = self.entries.len() - 1;
                }
                Removal::CurrentReplaced { cursor: self.cursor }
            }
            std::cmp::Ordering::Greater => Removal::Unaffected,
        };

        tracing::debug!(index, cursor = self.cursor, outcome = ?removal, "entry removed");
        self.check_invariants();
        removal
    }

    /// Empties the playlist and resets the cursor to `0`.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.check_invariants();
    }

    /// Moves the cursor. Out-of-range indices are ignored and return `false`.
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "cursor index out of range");
            return false;
        }
        self.cursor = index;
        true
    }

    /// Index after the cursor, wrapping to `0` past the end.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        Some((self.cursor + 1) % self.entries.len())
    }

    /// Index before the cursor, wrapping to the last entry before the start.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        Some(if self.cursor == 0 {
            self.entries.len() - 1
        } else {
            self.cursor - 1
        })
    }

    fn check_invariants(&self) {
        debug_assert!(
            if self.entries.is_empty() {
                self.cursor == 0
            } else {
                self.cursor < self.entries.len()
            },
            "cursor {} out of bounds for playlist of {}",
            self.cursor,
            self.entries.len()
        );
    }
}
