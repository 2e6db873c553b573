//! The game engine and turn state machine.
//!
//! `GameEngine` owns every piece of game state and is the only writer.
//! A presentation layer drives it through intents (`toggle_letter`,
//! `submit`, `pass`, `clear_selection`, `reset`) and follows along
//! through registered observers; it never mutates the model directly.
//!
//! ## Turn boundary
//!
//! Every successful submission or pass funnels through the same
//! boundary sequence, in this order:
//!
//! 1. Recompute defended flags from the new ownership
//! 2. Recompute both scores from cell counts
//! 3. Clear the selection
//! 4. Terminate if the board is fully owned or both pass flags are up
//! 5. Otherwise hand the turn to the opponent
//!
//! Scores and the termination verdict therefore always see
//! post-defense state.

use tracing::{debug, info, trace};

use crate::board::Grid;
use crate::core::{Coord, GameConfig, GameRng, PlayerId, PlayerPair, PlayerState};
use crate::events::{GameEvent, GameObserver};
use crate::selection::WordSelection;
use crate::words::{Dictionary, PlayedWords};

use super::error::GameError;
use super::status::{GameResult, GameStatus};

/// The complete state of one game.
///
/// ## Usage
///
/// ```
/// use tilepress::{Dictionary, GameConfig, GameEngine, PlayerId};
///
/// // Board rows: PDD / ODA / GIP
/// let mut game = GameEngine::new(
///     GameConfig::fixed(3, 3, "PDDODAGIP"),
///     Dictionary::from_words(["dog"]),
///     42,
/// );
///
/// game.toggle_letter(0, 1).unwrap(); // D
/// game.toggle_letter(1, 0).unwrap(); // O
/// game.toggle_letter(2, 0).unwrap(); // G
/// game.submit().unwrap();
///
/// assert_eq!(game.player(PlayerId::One).score, 3);
/// assert_eq!(game.current_player(), Some(PlayerId::Two));
/// ```
pub struct GameEngine {
    config: GameConfig,
    dictionary: Dictionary,
    rng: GameRng,
    grid: Grid,
    selection: WordSelection,
    players: PlayerPair<PlayerState>,
    played: PlayedWords,
    status: GameStatus,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create a game from a configuration, a dictionary, and a seed.
    ///
    /// The same configuration and seed always produce the same board.
    /// Player one holds the first turn.
    #[must_use]
    pub fn new(config: GameConfig, dictionary: Dictionary, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let grid = Grid::from_config(&config, &mut rng);
        let players = Self::fresh_players(&config);

        Self {
            config,
            dictionary,
            rng,
            grid,
            selection: WordSelection::new(),
            players,
            played: PlayedWords::new(),
            status: GameStatus::InProgress {
                current: PlayerId::One,
            },
            observers: Vec::new(),
        }
    }

    fn fresh_players(config: &GameConfig) -> PlayerPair<PlayerState> {
        PlayerPair::new(|p| PlayerState::new(config.player_names[p.index()].clone()))
    }

    /// Register an observer for all future events.
    ///
    /// Observers are notified synchronously, in registration order.
    /// Closures qualify: `game.subscribe(|event: &GameEvent| ...)`.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The live selection.
    #[must_use]
    pub fn selection(&self) -> &WordSelection {
        &self.selection
    }

    /// Every word played so far this game.
    #[must_use]
    pub fn played_words(&self) -> &PlayedWords {
        &self.played
    }

    /// The dictionary submissions are checked against.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// A player's name, score, and pass flag.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Where the game stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The turn holder, `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.status.current()
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.status.is_terminated()
    }

    fn ensure_in_progress(&self) -> Result<PlayerId, GameError> {
        match self.status {
            GameStatus::InProgress { current } => Ok(current),
            GameStatus::Terminated { .. } => Err(GameError::GameOver),
        }
    }

    /// Select or deselect the letter at `(row, col)`.
    ///
    /// A contained cell is removed, an absent one appended, so a second
    /// click undoes the first. Clicks on letters the opponent defends
    /// are ignored without an event; those tiles cannot change hands
    /// until the defense breaks. The player's own defended letters stay
    /// selectable for spelling.
    ///
    /// Panics if `(row, col)` is outside the board.
    pub fn toggle_letter(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let current = self.ensure_in_progress()?;
        let letter = *self.grid.letter(row, col);
        let coord = letter.coord();

        if letter.defended() && letter.owner() == Some(current.opponent()) {
            trace!(%coord, "toggle ignored on opponent-defended letter");
            return Ok(());
        }

        let old = self.selection.to_vec();
        if self.selection.contains(coord) {
            self.selection.remove(coord);
        } else {
            self.selection.push(coord);
        }
        trace!(%coord, selected = self.selection.len(), "selection toggled");

        let new = self.selection.to_vec();
        self.emit(GameEvent::SelectionChanged { old, new });
        Ok(())
    }

    /// Empty the selection.
    ///
    /// Always emits `SelectionChanged`, even when the selection was
    /// already empty, so observers can reset forecast displays
    /// unconditionally.
    pub fn clear_selection(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;

        let old = self.selection.to_vec();
        self.selection.clear();
        self.emit(GameEvent::SelectionChanged {
            old,
            new: Vec::new(),
        });
        Ok(())
    }

    /// Submit the current selection as a word.
    ///
    /// The dictionary is consulted before the played-word record. On
    /// success every undefended selected letter becomes the submitter's
    /// (defended ones are immune), the submitter's pass flag clears,
    /// and the turn boundary runs.
    ///
    /// A rejection leaves all state untouched: the selection stays as
    /// it was and the turn does not advance. The error is returned and
    /// also broadcast as [`GameEvent::SubmissionRejected`].
    pub fn submit(&mut self) -> Result<(), GameError> {
        let current = self.ensure_in_progress()?;
        let word = self.selection.word(&self.grid);

        if !self.dictionary.contains(&word) {
            return self.reject(GameError::NotInDictionary(word));
        }
        if self.played.contains(&word) {
            return self.reject(GameError::AlreadyPlayed(word));
        }

        debug!(%word, player = %current, "word accepted");
        self.played.record(word.clone(), current);
        self.emit(GameEvent::WordPlayed {
            word,
            owner: current,
        });

        for coord in self.selection.to_vec() {
            if self.grid.get(coord).defended() {
                continue;
            }
            if self.grid.set_owner(coord, Some(current)) {
                self.emit(GameEvent::LetterOwnerChanged {
                    coord,
                    owner: Some(current),
                });
            }
        }

        if self.players[current].passed {
            self.players[current].passed = false;
            self.emit(GameEvent::PassedChanged {
                player: current,
                passed: false,
            });
        }

        self.finish_turn(current);
        Ok(())
    }

    fn reject(&mut self, error: GameError) -> Result<(), GameError> {
        debug!(%error, "submission rejected");
        self.emit(GameEvent::SubmissionRejected {
            error: error.clone(),
        });
        Err(error)
    }

    /// Pass the turn.
    ///
    /// Raises the passing player's flag and runs the turn boundary; if
    /// the opponent's flag is already up, the game ends. The opponent's
    /// flag is never touched here. A raised flag survives resumed play
    /// and clears only on that player's own successful submission, so
    /// the reported pass state can stay up across later turns.
    pub fn pass(&mut self) -> Result<(), GameError> {
        let current = self.ensure_in_progress()?;
        debug!(player = %current, "pass");

        if !self.players[current].passed {
            self.players[current].passed = true;
            self.emit(GameEvent::PassedChanged {
                player: current,
                passed: true,
            });
        }

        self.finish_turn(current);
        Ok(())
    }

    /// The turn boundary. Order matters: defense feeds the scores and
    /// the scores feed the termination verdict.
    fn finish_turn(&mut self, current: PlayerId) {
        for coord in self.grid.recompute_defense() {
            let defended = self.grid.get(coord).defended();
            self.emit(GameEvent::LetterDefendedChanged { coord, defended });
        }

        let counts = self.grid.count_by_owner();
        for player in PlayerId::ALL {
            let score = counts.owned_by(player) as u32;
            if self.players[player].score != score {
                self.players[player].score = score;
                self.emit(GameEvent::ScoreChanged { player, score });
            }
        }

        let old = self.selection.to_vec();
        self.selection.clear();
        self.emit(GameEvent::SelectionChanged {
            old,
            new: Vec::new(),
        });

        let both_passed =
            self.players[PlayerId::One].passed && self.players[PlayerId::Two].passed;
        if self.grid.is_fully_owned() || both_passed {
            let result = self.final_result();
            self.status = GameStatus::Terminated { result };
            info!(?result, "game over");
            self.emit(GameEvent::GameTerminated { result });
        } else {
            let next = current.opponent();
            self.status = GameStatus::InProgress { current: next };
            debug!(player = %next, "turn changed");
            self.emit(GameEvent::TurnChanged { current: next });
        }
    }

    fn final_result(&self) -> GameResult {
        let one = self.players[PlayerId::One].score;
        let two = self.players[PlayerId::Two].score;

        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::One),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// What `player`'s score becomes if the current selection lands.
    ///
    /// `None` while the selection is empty; displays fall back to the
    /// real score. Only undefended selected letters move the number:
    /// the turn holder gains one per letter not already theirs, the
    /// waiting player loses one per letter currently theirs. Purely
    /// derived; calling this changes nothing.
    #[must_use]
    pub fn forecast(&self, player: PlayerId) -> Option<u32> {
        if self.selection.is_empty() {
            return None;
        }
        let current = self.status.current()?;

        let mut score = self.players[player].score;
        for &coord in self.selection.letters() {
            let letter = self.grid.get(coord);
            if letter.defended() {
                continue;
            }
            if player == current {
                if letter.owner() != Some(player) {
                    score += 1;
                }
            } else if letter.owner() == Some(player) {
                // Selected letters the waiting player owns are exactly
                // the ones the turn holder would take from them
                score -= 1;
            }
        }
        Some(score)
    }

    /// Start a new game with the same configuration.
    ///
    /// Re-rolls the board from the engine's RNG stream (consecutive
    /// resets differ; the whole sequence is reproducible per seed),
    /// zeroes scores and pass flags, forgets played words, and gives
    /// player one the turn. Works from any state, including terminated.
    pub fn reset(&mut self) {
        self.start_game();
    }

    /// Start a new game with a different configuration.
    pub fn reset_with(&mut self, config: GameConfig) {
        self.config = config;
        self.start_game();
    }

    fn start_game(&mut self) {
        let old_selection = self.selection.to_vec();

        self.grid = Grid::from_config(&self.config, &mut self.rng);
        self.selection = WordSelection::new();
        self.played.clear();
        self.players = Self::fresh_players(&self.config);
        self.status = GameStatus::InProgress {
            current: PlayerId::One,
        };
        info!(board = %self.grid.text(), "game reset");

        // GameReset first: observers re-read the board, then the
        // individual notifications bring the scalar displays in line
        self.emit(GameEvent::GameReset);
        for player in PlayerId::ALL {
            self.emit(GameEvent::ScoreChanged { player, score: 0 });
        }
        self.emit(GameEvent::SelectionChanged {
            old: old_selection,
            new: Vec::new(),
        });
        self.emit(GameEvent::TurnChanged {
            current: PlayerId::One,
        });
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("selection", &self.selection)
            .field("players", &self.players)
            .field("played", &self.played)
            .field("status", &self.status)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
