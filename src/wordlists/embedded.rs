//! Embedded sample lexicon
//!
//! A small lexicon compiled into the binary so the game runs without any
//! external files.

/// JSON text of the bundled lexicon
pub const SAMPLE_LEXICON: &str = include_str!("../../data/lexicon.json");
