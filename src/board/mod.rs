//! The game board: letter grid, neighbor queries, and the defense rule.

pub mod grid;

pub use grid::{Grid, NeighborOwner, OwnerCounts};
