//! Letter tiles.
//!
//! A `Letter` is one cell of the board: a fixed position and character,
//! plus the two fields that change during play (owner and defended).
//! Tiles are created at game start and replaced wholesale on reset;
//! position and character never change in between.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerId;

/// A single letter tile on the board.
///
/// The setters report whether the stored value actually changed, so the
/// engine can emit change events exactly on transitions. The tile itself
/// carries no notification machinery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Letter {
    coord: Coord,
    value: char,
    owner: Option<PlayerId>,
    defended: bool,
}

impl Letter {
    /// Create an unowned tile.
    ///
    /// The character is normalized to uppercase. Panics if it is not an
    /// ASCII letter.
    #[must_use]
    pub fn new(coord: Coord, value: char) -> Self {
        assert!(
            value.is_ascii_alphabetic(),
            "Letter value must be an ASCII letter, got {:?}",
            value
        );

        Self {
            coord,
            value: value.to_ascii_uppercase(),
            owner: None,
            defended: false,
        }
    }

    /// Position of this tile on the board.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// The tile's character (uppercase ASCII).
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }

    /// Current owner, `None` while unclaimed.
    #[must_use]
    pub const fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Whether every in-bounds neighbor shares this tile's owner.
    ///
    /// Maintained by the grid's defense recomputation, not by the tile.
    #[must_use]
    pub const fn defended(&self) -> bool {
        self.defended
    }

    /// Set the owner. Returns `true` if the value changed.
    pub fn set_owner(&mut self, owner: Option<PlayerId>) -> bool {
        if self.owner == owner {
            return false;
        }
        self.owner = owner;
        true
    }

    /// Set the defended flag. Returns `true` if the value changed.
    pub fn set_defended(&mut self, defended: bool) -> bool {
        if self.defended == defended {
            return false;
        }
        self.defended = defended;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_letter_is_unclaimed() {
        let letter = Letter::new(Coord::new(1, 2), 'D');

        assert_eq!(letter.coord(), Coord::new(1, 2));
        assert_eq!(letter.value(), 'D');
        assert_eq!(letter.owner(), None);
        assert!(!letter.defended());
    }

    #[test]
    fn test_value_uppercased() {
        let letter = Letter::new(Coord::new(0, 0), 'q');
        assert_eq!(letter.value(), 'Q');
    }

    #[test]
    #[should_panic(expected = "must be an ASCII letter")]
    fn test_non_alphabetic_value() {
        Letter::new(Coord::new(0, 0), '7');
    }

    #[test]
    fn test_set_owner_reports_change() {
        let mut letter = Letter::new(Coord::new(0, 0), 'A');

        assert!(letter.set_owner(Some(PlayerId::One)));
        assert_eq!(letter.owner(), Some(PlayerId::One));

        // Same value again is not a change
        assert!(!letter.set_owner(Some(PlayerId::One)));

        assert!(letter.set_owner(Some(PlayerId::Two)));
        assert!(letter.set_owner(None));
        assert_eq!(letter.owner(), None);
    }

    #[test]
    fn test_set_defended_reports_change() {
        let mut letter = Letter::new(Coord::new(0, 0), 'A');

        assert!(letter.set_defended(true));
        assert!(letter.defended());
        assert!(!letter.set_defended(true));
        assert!(letter.set_defended(false));
        assert!(!letter.defended());
    }

    #[test]
    fn test_serialization() {
        let mut letter = Letter::new(Coord::new(2, 1), 'K');
        letter.set_owner(Some(PlayerId::Two));

        let json = serde_json::to_string(&letter).unwrap();
        let deserialized: Letter = serde_json::from_str(&json).unwrap();
        assert_eq!(letter, deserialized);
    }
}
