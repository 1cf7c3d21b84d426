//! Hangman solving algorithms
//!
//! Weighted word selection for the game, and the pattern matcher and letter
//! ranker behind the helper.

pub mod helper;
pub mod matcher;
pub mod ranker;
pub mod selector;

pub use helper::{HelperQuery, QueryResult, query, suggest_letter};
pub use matcher::{filter_candidates, word_matches};
pub use ranker::{LetterScore, RankedWord, rank_letters, rank_words};
pub use selector::{EPSILON, SelectError, WordSelector, select};
