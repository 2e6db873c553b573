//! Engine error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an intent was refused.
///
/// `NotInDictionary` and `AlreadyPlayed` are ordinary gameplay outcomes:
/// state is untouched, the player may revise the selection and try
/// again, and the rejection is also broadcast as a
/// [`SubmissionRejected`](crate::GameEvent::SubmissionRejected) event.
/// `GameOver` signals a caller bug (driving a finished game) and is only
/// returned, never broadcast.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// The selection does not spell a dictionary word.
    #[error("\"{0}\" is not in the dictionary")]
    NotInDictionary(String),

    /// The word was played earlier this game, by either player.
    #[error("\"{0}\" has already been played")]
    AlreadyPlayed(String),

    /// A mutating intent arrived after termination.
    #[error("the game is already over")]
    GameOver,
}
