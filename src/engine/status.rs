//! Game status and the terminal result.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner by strictly higher score.
    Winner(PlayerId),
    /// Equal scores at termination.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie => false,
        }
    }
}

/// Where the game stands.
///
/// Exactly one player holds the turn while the game runs. Termination is
/// absorbing: once `Terminated`, only a reset produces a new game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game is running and `current` holds the turn.
    InProgress { current: PlayerId },
    /// The game is over with `result`.
    Terminated { result: GameResult },
}

impl GameStatus {
    /// The turn holder, `None` once terminated.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress { current } => Some(*current),
            GameStatus::Terminated { .. } => None,
        }
    }

    /// The terminal result, `None` while the game runs.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::InProgress { .. } => None,
            GameStatus::Terminated { result } => Some(*result),
        }
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(self, GameStatus::Terminated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::Two);
        assert!(!result.is_winner(PlayerId::One));
        assert!(result.is_winner(PlayerId::Two));

        let tie = GameResult::Tie;
        assert!(!tie.is_winner(PlayerId::One));
        assert!(!tie.is_winner(PlayerId::Two));
    }

    #[test]
    fn test_status_accessors() {
        let running = GameStatus::InProgress {
            current: PlayerId::One,
        };
        assert_eq!(running.current(), Some(PlayerId::One));
        assert_eq!(running.result(), None);
        assert!(!running.is_terminated());

        let over = GameStatus::Terminated {
            result: GameResult::Tie,
        };
        assert_eq!(over.current(), None);
        assert_eq!(over.result(), Some(GameResult::Tie));
        assert!(over.is_terminated());
    }

    #[test]
    fn test_serialization() {
        let status = GameStatus::Terminated {
            result: GameResult::Winner(PlayerId::One),
        };
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
