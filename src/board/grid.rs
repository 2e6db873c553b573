//! The letter grid and the defense rule.
//!
//! The `Grid` owns every `Letter` for the lifetime of a game. Dimensions
//! are fixed at construction; ownership flows through `set_owner` and the
//! derived `defended` flags are refreshed by `recompute_defense` after
//! every ownership change.
//!
//! ## Defense
//!
//! A tile is defended when it has an owner and every in-bounds orthogonal
//! neighbor has the same owner. Board edges satisfy the condition
//! vacuously, so corner tiles need only their two real neighbors.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::config::LetterSource;
use crate::core::coord::{Coord, Direction};
use crate::core::letter::Letter;
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::rng::GameRng;

/// What sits one step away from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborOwner {
    /// The step leaves the board. Counts as agreeing with any owner.
    Edge,
    /// An in-bounds cell with its current owner.
    Cell(Option<PlayerId>),
}

/// Cell-ownership tallies for one board snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerCounts {
    owned: PlayerPair<usize>,
    unowned: usize,
}

impl OwnerCounts {
    /// Number of cells owned by `player`.
    #[must_use]
    pub fn owned_by(&self, player: PlayerId) -> usize {
        self.owned[player]
    }

    /// Number of unclaimed cells.
    #[must_use]
    pub fn unowned(&self) -> usize {
        self.unowned
    }

    /// Total cells counted. Always equals the board size.
    #[must_use]
    pub fn total(&self) -> usize {
        self.owned[PlayerId::One] + self.owned[PlayerId::Two] + self.unowned
    }
}

/// The game board: a fixed `rows` x `columns` grid of letters.
///
/// Stored row-major. Every cell is always occupied; there are no gaps
/// and letters never move.
///
/// ## Usage
///
/// ```
/// use tilepress::board::Grid;
/// use tilepress::core::{Coord, PlayerId};
///
/// let mut grid = Grid::from_letters(3, 3, "PDDODAGIP");
/// assert_eq!(grid.letter(1, 0).value(), 'O');
///
/// grid.set_owner(Coord::new(1, 0), Some(PlayerId::One));
/// grid.recompute_defense();
///
/// assert_eq!(grid.count_by_owner().owned_by(PlayerId::One), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Letter>,
}

impl Grid {
    /// Build a board from a literal row-major letter string.
    ///
    /// Letters are uppercased on ingest. Panics if the string does not
    /// cover the board exactly or contains a non-letter.
    #[must_use]
    pub fn from_letters(rows: usize, columns: usize, letters: &str) -> Self {
        assert!(rows > 0, "Must have at least 1 row");
        assert!(columns > 0, "Must have at least 1 column");

        let chars: Vec<char> = letters.chars().collect();
        assert_eq!(
            chars.len(),
            rows * columns,
            "Board letters must cover the whole board"
        );

        let cells = chars
            .into_iter()
            .enumerate()
            .map(|(i, value)| Letter::new(Coord::new(i / columns, i % columns), value))
            .collect();

        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Build a board by drawing letters from `source`.
    #[must_use]
    pub fn generate(
        rows: usize,
        columns: usize,
        source: &LetterSource,
        rng: &mut GameRng,
    ) -> Self {
        let letters = source.sample(rows * columns, rng);
        Self::from_letters(rows, columns, &letters)
    }

    /// Build the board a configuration describes.
    ///
    /// A fixed layout takes priority over the letter source.
    #[must_use]
    pub fn from_config(config: &GameConfig, rng: &mut GameRng) -> Self {
        match &config.fixed_letters {
            Some(letters) => Self::from_letters(config.rows, config.columns, letters),
            None => Self::generate(config.rows, config.columns, &config.letter_source, rng),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A grid is never empty; this exists for the `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "Cell ({}, {}) is outside the {}x{} board",
            row,
            col,
            self.rows,
            self.columns
        );
        row * self.columns + col
    }

    /// The letter at `(row, col)`. Panics if out of bounds.
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> &Letter {
        &self.cells[self.idx(row, col)]
    }

    /// The letter at `coord`. Panics if out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> &Letter {
        self.letter(coord.row, coord.col)
    }

    /// Set the owner of the letter at `coord`.
    ///
    /// Returns `true` if the owner actually changed. Does not refresh
    /// defense flags; call `recompute_defense` once the batch of
    /// ownership changes is complete.
    pub fn set_owner(&mut self, coord: Coord, owner: Option<PlayerId>) -> bool {
        let idx = self.idx(coord.row, coord.col);
        self.cells[idx].set_owner(owner)
    }

    /// Iterate over all letters in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Letter> {
        self.cells.iter()
    }

    /// The board letters as a row-major string.
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().map(Letter::value).collect()
    }

    /// What sits one step from `coord` in `direction`.
    ///
    /// Returns `NeighborOwner::Edge` when the step leaves the board.
    #[must_use]
    pub fn neighbor_owner(&self, coord: Coord, direction: Direction) -> NeighborOwner {
        let next = match coord.step(direction) {
            Some(next) if next.row < self.rows && next.col < self.columns => next,
            _ => return NeighborOwner::Edge,
        };
        NeighborOwner::Cell(self.get(next).owner())
    }

    /// Whether the letter at `coord` is defended under the current
    /// ownership. Unowned letters are never defended.
    ///
    /// This evaluates the rule directly; the stored `defended` flags are
    /// only refreshed by `recompute_defense`.
    #[must_use]
    pub fn is_defended(&self, coord: Coord) -> bool {
        let owner = match self.get(coord).owner() {
            Some(owner) => owner,
            None => return false,
        };

        Direction::ALL
            .iter()
            .all(|&direction| match self.neighbor_owner(coord, direction) {
                NeighborOwner::Edge => true,
                NeighborOwner::Cell(neighbor) => neighbor == Some(owner),
            })
    }

    /// Refresh every letter's `defended` flag from current ownership.
    ///
    /// Returns the coords whose flag flipped, in row-major order, so the
    /// caller can emit one change notification per transition.
    pub fn recompute_defense(&mut self) -> Vec<Coord> {
        let targets: Vec<bool> = self
            .cells
            .iter()
            .map(|cell| self.is_defended(cell.coord()))
            .collect();

        let mut changed = Vec::new();
        for (cell, defended) in self.cells.iter_mut().zip(targets) {
            if cell.set_defended(defended) {
                changed.push(cell.coord());
            }
        }
        changed
    }

    /// Whether every cell has an owner.
    #[must_use]
    pub fn is_fully_owned(&self) -> bool {
        self.cells.iter().all(|cell| cell.owner().is_some())
    }

    /// Tally cell ownership across the whole board.
    #[must_use]
    pub fn count_by_owner(&self) -> OwnerCounts {
        let mut counts = OwnerCounts {
            owned: PlayerPair::with_value(0),
            unowned: 0,
        };

        for cell in &self.cells {
            match cell.owner() {
                Some(player) => counts.owned[player] += 1,
                None => counts.unowned += 1,
            }
        }

        counts
    }
}
