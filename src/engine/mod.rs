//! The rules engine: intents, turn order, scoring, and termination.

pub mod error;
pub mod game;
pub mod status;

pub use error::GameError;
pub use game::GameEngine;
pub use status::{GameResult, GameStatus};
