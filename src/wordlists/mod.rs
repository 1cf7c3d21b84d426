//! Lexicon sources
//!
//! The embedded sample lexicon, file loading, and the offline builder that
//! derives lexicon documents from word lists and frequency tables.

pub mod builder;
mod embedded;
pub mod loader;

pub use embedded::SAMPLE_LEXICON;
