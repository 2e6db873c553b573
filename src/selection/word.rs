//! The live word selection.
//!
//! A `WordSelection` is the ordered list of cells the current player has
//! picked so far. It stores coordinates only; the letters themselves stay
//! in the grid, so the selection can never disagree with the board about
//! a tile's character or owner.
//!
//! Membership maintenance is the engine's job. The engine's toggle checks
//! `contains` before calling `push`/`remove`, so `remove` panicking on an
//! absent cell marks a presentation/engine desync, not a user mistake.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Grid;
use crate::core::coord::Coord;

/// Ordered, duplicate-free sequence of selected cells.
///
/// Most words fit the inline capacity, so toggling letters does not
/// allocate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSelection {
    letters: SmallVec<[Coord; 8]>,
}

impl WordSelection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether `coord` is currently selected.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.letters.contains(&coord)
    }

    /// The selected coords in selection order.
    #[must_use]
    pub fn letters(&self) -> &[Coord] {
        &self.letters
    }

    /// The selected coords as an owned snapshot, for change events.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Coord> {
        self.letters.to_vec()
    }

    /// Append a cell to the end of the selection.
    ///
    /// A cell that is already selected is left where it is; returns
    /// whether the selection grew.
    pub fn push(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            return false;
        }
        self.letters.push(coord);
        true
    }

    /// Remove a cell from the selection, closing the gap.
    ///
    /// Panics if the cell is not selected.
    pub fn remove(&mut self, coord: Coord) {
        let pos = self
            .letters
            .iter()
            .position(|&c| c == coord)
            .unwrap_or_else(|| panic!("Letter at {} is not in the selection", coord));
        self.letters.remove(pos);
    }

    /// Remove every cell. A no-op on an empty selection.
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// The word this selection spells on `grid`, in selection order.
    ///
    /// Letters are stored uppercase, so the result is uppercase; callers
    /// normalize for dictionary lookups.
    #[must_use]
    pub fn word(&self, grid: &Grid) -> String {
        self.letters.iter().map(|&coord| grid.get(coord).value()).collect()
    }
}
