//! The ordered letter selection a word is spelled from.

pub mod word;

pub use word::WordSelection;
