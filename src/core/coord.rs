//! Grid coordinates and the four-neighbor directions.
//!
//! A `Coord` identifies a cell on the board for the whole lifetime of a
//! game. Letters never move between cells, so a coordinate is the stable
//! identity that selections and events refer to.

use serde::{Deserialize, Serialize};

/// Position of a cell on the board.
///
/// Coordinates are zero-based, `row` before `col`, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighboring coordinate one step in `direction`.
    ///
    /// Returns `None` if the step would leave the board on the top or
    /// left side. The grid applies its own upper-bounds check for the
    /// bottom and right sides, since only it knows the dimensions.
    ///
    /// ```
    /// use tilepress::core::{Coord, Direction};
    ///
    /// let cell = Coord::new(1, 0);
    /// assert_eq!(cell.step(Direction::Up), Some(Coord::new(0, 0)));
    /// assert_eq!(cell.step(Direction::Left), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal directions used by the defense rule.
///
/// Diagonals never count as neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, for neighbor iteration.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta for one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_all_directions() {
        let cell = Coord::new(2, 3);

        assert_eq!(cell.step(Direction::Up), Some(Coord::new(1, 3)));
        assert_eq!(cell.step(Direction::Down), Some(Coord::new(3, 3)));
        assert_eq!(cell.step(Direction::Left), Some(Coord::new(2, 2)));
        assert_eq!(cell.step(Direction::Right), Some(Coord::new(2, 4)));
    }

    #[test]
    fn test_step_underflow() {
        let origin = Coord::new(0, 0);

        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(1, 2)), "(1, 2)");
    }

    #[test]
    fn test_serialization() {
        let coord = Coord::new(4, 7);
        let json = serde_json::to_string(&coord).unwrap();
        let deserialized: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, deserialized);
    }
}
