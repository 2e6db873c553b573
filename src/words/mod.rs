//! Word legality: the dictionary and the played-word record.

pub mod dictionary;
pub mod played;

pub use dictionary::Dictionary;
pub use played::{PlayedWord, PlayedWords};
