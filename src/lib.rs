//! Hangman Helper
//!
//! A Hangman game whose secret words are drawn in proportion to how common they
//! are, plus a helper that lists the words matching a partially revealed
//! pattern and ranks the letters most worth guessing next.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_helper::core::{Lexicon, Pattern, parse_letters};
//! use hangman_helper::solver::{HelperQuery, query};
//!
//! let lexicon = Lexicon::from_pairs([("cat", 10.0), ("car", 5.0), ("cow", 1.0)]).unwrap();
//!
//! // Which letter should follow "c _ _" when 'o' is known to be absent?
//! let request = HelperQuery::new(Pattern::parse("c__").unwrap(), parse_letters("o"));
//! let result = query(&lexicon, &request);
//!
//! assert_eq!(result.words.len(), 2);
//! assert_eq!(result.best_letter(), Some('a'));
//! ```

// Core domain types
pub mod core;

// Selection, matching and ranking
pub mod solver;

// Game sessions
pub mod game;

// Lexicon sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
