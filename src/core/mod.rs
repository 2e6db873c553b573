//! Core engine types: coordinates, letters, players, RNG, configuration.
//!
//! This module contains the fundamental building blocks of the game
//! model. Everything here is plain data with no notification machinery;
//! the engine layers events on top.

pub mod config;
pub mod coord;
pub mod letter;
pub mod player;
pub mod rng;

pub use config::{GameConfig, LetterSource};
pub use coord::{Coord, Direction};
pub use letter::Letter;
pub use player::{PlayerId, PlayerPair, PlayerState};
pub use rng::GameRng;
