//! Typed state-change events.
//!
//! Every externally visible mutation the engine performs is mirrored by
//! exactly one event variant, so a presentation layer can stay in sync
//! without polling. Value-carrying variants (`owner`, `defended`,
//! `score`, `passed`) fire only when the stored value actually changed;
//! `SelectionChanged` also fires on a clear of an already empty
//! selection, so forecast displays reset reliably.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::player::PlayerId;
use crate::engine::error::GameError;
use crate::engine::status::GameResult;

/// A state change announced to registered observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile changed hands (or was claimed for the first time).
    LetterOwnerChanged {
        coord: Coord,
        owner: Option<PlayerId>,
    },

    /// A tile's defended flag flipped during defense recomputation.
    LetterDefendedChanged { coord: Coord, defended: bool },

    /// The live selection changed, including every clear.
    SelectionChanged { old: Vec<Coord>, new: Vec<Coord> },

    /// A player's score was recomputed to a new value.
    ScoreChanged { player: PlayerId, score: u32 },

    /// A player's pass flag was raised or cleared.
    PassedChanged { player: PlayerId, passed: bool },

    /// The turn moved to `current`.
    TurnChanged { current: PlayerId },

    /// A submission was accepted and recorded.
    WordPlayed { word: String, owner: PlayerId },

    /// A submission was rejected; state is unchanged.
    SubmissionRejected { error: GameError },

    /// The game reached a terminal state.
    GameTerminated { result: GameResult },

    /// The board was rebuilt; observers should re-read everything.
    GameReset,
}
