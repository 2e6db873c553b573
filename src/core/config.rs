//! Game configuration types.
//!
//! The embedding application configures a game at startup by providing:
//! - Board dimensions (`rows` x `columns`)
//! - A `LetterSource` describing how board letters are drawn
//! - Optionally a literal board layout for deterministic setups
//! - Player display names
//!
//! The engine never hardcodes board contents; configuration decides them.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Per-mille letter weights from the English letter-frequency
/// distribution (see <https://en.wikipedia.org/wiki/Letter_frequency>).
const ENGLISH_WEIGHTS: [(char, u32); 26] = [
    ('A', 82),
    ('B', 15),
    ('C', 28),
    ('D', 43),
    ('E', 127),
    ('F', 22),
    ('G', 20),
    ('H', 61),
    ('I', 70),
    ('J', 2),
    ('K', 8),
    ('L', 40),
    ('M', 24),
    ('N', 67),
    ('O', 75),
    ('P', 19),
    ('Q', 1),
    ('R', 60),
    ('S', 63),
    ('T', 91),
    ('U', 28),
    ('V', 10),
    ('W', 24),
    ('X', 2),
    ('Y', 20),
    ('Z', 1),
];

/// How board letters are drawn at game start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterSource {
    /// Every letter A-Z equally likely.
    Uniform,

    /// Letters weighted by English text frequency, so boards tend to be
    /// playable rather than consonant soup.
    #[default]
    EnglishFrequency,

    /// Explicit weighted table. Weights are relative; zero-weight
    /// entries never appear.
    Custom(Vec<(char, u32)>),
}

impl LetterSource {
    /// Draw `count` letters from this source.
    ///
    /// Panics if a custom table is empty or carries no positive weight.
    pub fn sample(&self, count: usize, rng: &mut GameRng) -> String {
        match self {
            LetterSource::Uniform => (0..count)
                .map(|_| char::from(b'A' + rng.gen_range_usize(0..26) as u8))
                .collect(),
            LetterSource::EnglishFrequency => Self::sample_table(&ENGLISH_WEIGHTS, count, rng),
            LetterSource::Custom(table) => Self::sample_table(table, count, rng),
        }
    }

    fn sample_table(table: &[(char, u32)], count: usize, rng: &mut GameRng) -> String {
        let weights: Vec<u32> = table.iter().map(|&(_, w)| w).collect();
        assert!(
            weights.iter().any(|&w| w > 0),
            "Letter table must have at least one positive weight"
        );

        (0..count)
            .map(|_| {
                let idx = rng
                    .choose_weighted(&weights)
                    .expect("table has a positive weight");
                table[idx].0.to_ascii_uppercase()
            })
            .collect()
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use tilepress::core::{GameConfig, LetterSource};
///
/// let config = GameConfig::new(5, 5)
///     .with_letter_source(LetterSource::Uniform)
///     .with_player_names("Ada", "Grace");
///
/// assert_eq!(config.cell_count(), 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of board rows (at least 1).
    pub rows: usize,

    /// Number of board columns (at least 1).
    pub columns: usize,

    /// How board letters are drawn.
    pub letter_source: LetterSource,

    /// Literal board override, `rows * columns` characters row-major.
    /// When set, `letter_source` is ignored.
    pub fixed_letters: Option<String>,

    /// Display names, player one first.
    pub player_names: [String; 2],
}

impl GameConfig {
    /// Create a configuration with the given board dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0, "Must have at least 1 row");
        assert!(columns > 0, "Must have at least 1 column");

        Self {
            rows,
            columns,
            letter_source: LetterSource::default(),
            fixed_letters: None,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }

    /// Create a configuration with a literal board layout.
    ///
    /// Shorthand for `new(rows, columns).with_fixed_letters(letters)`.
    pub fn fixed(rows: usize, columns: usize, letters: impl Into<String>) -> Self {
        Self::new(rows, columns).with_fixed_letters(letters)
    }

    /// Set the letter source.
    #[must_use]
    pub fn with_letter_source(mut self, source: LetterSource) -> Self {
        self.letter_source = source;
        self
    }

    /// Set a literal board layout, `rows * columns` letters row-major.
    ///
    /// The string is uppercased on ingest. Panics if the length does not
    /// match the board or any character is not an ASCII letter.
    #[must_use]
    pub fn with_fixed_letters(mut self, letters: impl Into<String>) -> Self {
        let letters: String = letters.into().to_ascii_uppercase();
        assert_eq!(
            letters.chars().count(),
            self.cell_count(),
            "Fixed letters must cover the whole board"
        );
        assert!(
            letters.chars().all(|c| c.is_ascii_alphabetic()),
            "Fixed letters must be ASCII letters"
        );

        self.fixed_letters = Some(letters);
        self
    }

    /// Set the player display names.
    #[must_use]
    pub fn with_player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.player_names = [one.into(), two.into()];
        self
    }

    /// Total number of board cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for GameConfig {
    /// The standard game: a 5x5 board of frequency-weighted letters.
    fn default() -> Self {
        Self::new(5, 5)
    }
}
