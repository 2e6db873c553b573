//! # tilepress
//!
//! A two-player territorial word game rules engine.
//!
//! Players take turns spelling words out of a fixed grid of letters.
//! Every letter used in an accepted word changes owner, a letter whose
//! neighbors all share its owner becomes defended and immune to
//! capture, and the game ends when the board is full or both players
//! pass.
//!
//! ## Design Principles
//!
//! 1. **Plain Data**: The model is inert state plus events. No
//!    rendering, I/O, or UI-framework types anywhere in the crate.
//!
//! 2. **Single Writer**: `GameEngine` owns all state and is the only
//!    thing that mutates it. Presentation layers send intents and
//!    follow along through registered observers.
//!
//! 3. **Deterministic**: Board generation is seeded. A configuration
//!    plus a seed reproduces a game exactly.
//!
//! ## Architecture
//!
//! - **Turn boundary**: every accepted word or pass runs the same
//!   sequence (defense, scores, selection, termination, turn), so
//!   derived state is never stale between turns.
//!
//! - **Explicit observers**: events go only to observers registered on
//!   the engine instance. Two engines in one process never hear each
//!   other.
//!
//! ## Modules
//!
//! - `core`: Coordinates, letters, players, RNG, configuration
//! - `board`: The letter grid, ownership, and defense
//! - `selection`: The ordered in-progress word
//! - `words`: Dictionary lookups and the played-word record
//! - `events`: Event types and observer registration
//! - `engine`: Turn order, scoring, and termination

pub mod core;
pub mod board;
pub mod selection;
pub mod words;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction,
    GameConfig, LetterSource,
    GameRng,
    Letter,
    PlayerId, PlayerPair, PlayerState,
};

pub use crate::board::{Grid, NeighborOwner, OwnerCounts};

pub use crate::selection::WordSelection;

pub use crate::words::{Dictionary, PlayedWord, PlayedWords};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::engine::{GameEngine, GameError, GameResult, GameStatus};
