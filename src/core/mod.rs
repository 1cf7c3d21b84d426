//! Core domain types for Hangman
//!
//! The lexicon and the pattern template. Everything here is pure data with
//! validation at construction time.

mod lexicon;
mod pattern;

pub use lexicon::{Lexicon, LexiconError, is_alphabetic_word};
pub use pattern::{Cell, Pattern, PatternError, parse_letters};
pub(crate) use pattern::fold_case;
