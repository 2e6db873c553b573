//! The record of words already played.
//!
//! Once either player plays a word, nobody may play it again for the
//! rest of the game. The record is append-only during a game and global
//! across both players; comparisons are case-normalized while the
//! entries keep the casing they were accepted with.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// One accepted word and who played it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedWord {
    /// The word as accepted (board casing).
    pub word: String,

    /// The player whose submission it was.
    pub owner: PlayerId,
}

/// Append-only log of every word played this game.
///
/// Backed by persistent structures, so cloning a snapshot for history
/// views is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedWords {
    entries: Vector<PlayedWord>,
    index: ImHashSet<String>,
}

impl PlayedWords {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `word` was already played by either player.
    ///
    /// Case-insensitive.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word.to_lowercase().as_str())
    }

    /// Append a word to the record.
    ///
    /// The engine rejects duplicate submissions before recording, so a
    /// duplicate here is a consistency bug and panics.
    pub fn record(&mut self, word: impl Into<String>, owner: PlayerId) {
        let word = word.into();
        assert!(
            !self.contains(&word),
            "Word {:?} was already recorded",
            word
        );

        self.index.insert(word.to_lowercase());
        self.entries.push_back(PlayedWord { word, owner });
    }

    /// Iterate over entries in play order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayedWord> {
        self.entries.iter()
    }

    /// The most recently played word.
    #[must_use]
    pub fn last(&self) -> Option<&PlayedWord> {
        self.entries.last()
    }

    /// Number of words played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything. Only used when a game is reset.
    pub fn clear(&mut self) {
        self.entries = Vector::new();
        self.index = ImHashSet::new();
    }
}
