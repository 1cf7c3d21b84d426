//! Frequency-annotated word dictionary
//!
//! The lexicon is a flat JSON object mapping each word to a non-negative
//! frequency score. It is loaded once and never mutated afterwards, so a single
//! instance can be borrowed by any number of game and helper sessions.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a lexicon document
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lexicon is not a JSON object of word frequencies: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("word '{word}' has invalid frequency {value}")]
    InvalidFrequency { word: String, value: String },
}

/// An immutable word → frequency mapping
///
/// Iteration follows the order of the source document, which keeps candidate
/// lists and ranking ties reproducible.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl Lexicon {
    /// Build a lexicon from `(word, frequency)` pairs
    ///
    /// Words are lower-cased; when two entries fold to the same word the first
    /// one is kept.
    ///
    /// # Errors
    /// Returns `LexiconError::InvalidFrequency` for a negative or non-finite score.
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_pairs([("cat", 10.0), ("car", 5.0)]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.frequency("cat"), 10.0);
    /// assert_eq!(lexicon.frequency("dog"), 0.0);
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for (word, frequency) in pairs {
            lexicon.insert(word.as_ref(), frequency)?;
        }
        Ok(lexicon)
    }

    /// Parse a lexicon from the text of a JSON document
    ///
    /// # Errors
    /// Returns `LexiconError::Parse` if the text is not a JSON object, or
    /// `LexiconError::InvalidFrequency` if a value is not a usable number.
    pub fn from_json_str(text: &str) -> Result<Self, LexiconError> {
        let document: Map<String, Value> = serde_json::from_str(text)?;
        let mut lexicon = Self::default();

        for (word, value) in &document {
            let frequency = value
                .as_f64()
                .ok_or_else(|| LexiconError::InvalidFrequency {
                    word: word.clone(),
                    value: value.to_string(),
                })?;
            lexicon.insert(word, frequency)?;
        }

        Ok(lexicon)
    }

    /// Load a lexicon document from disk
    ///
    /// # Errors
    /// Returns `LexiconError::Io` if the file cannot be read, otherwise any
    /// error from [`Lexicon::from_json_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = Self::from_json_str(&text)?;
        log::debug!("loaded {} lexicon entries from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    fn insert(&mut self, word: &str, frequency: f64) -> Result<(), LexiconError> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(LexiconError::InvalidFrequency {
                word: word.to_string(),
                value: frequency.to_string(),
            });
        }

        let word = word.to_lowercase();
        if self.index.contains_key(&word) {
            log::debug!("duplicate lexicon entry '{word}' ignored");
            return Ok(());
        }

        self.index.insert(word.clone(), self.entries.len());
        self.entries.push((word, frequency));
        Ok(())
    }

    /// Frequency score of a word, or 0 if the word is unknown
    #[must_use]
    pub fn frequency(&self, word: &str) -> f64 {
        self.index
            .get(word)
            .map_or(0.0, |&i| self.entries[i].1)
    }

    /// Check whether a word is present
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All entries in document order
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(w, f)| (w.as_str(), *f))
    }

    /// All words in document order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(w, _)| w.as_str())
    }

    /// Words made only of alphabetic characters, in document order
    pub fn alphabetic_words(&self) -> impl Iterator<Item = &str> {
        self.words().filter(|w| is_alphabetic_word(w))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// True for a non-empty word consisting solely of alphabetic characters
#[must_use]
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}
