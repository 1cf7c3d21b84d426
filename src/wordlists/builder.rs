//! Offline lexicon derivation
//!
//! Turns a plain word list and an external frequency table into the lexicon
//! document the game loads. Each word's relative frequency (a fraction of all
//! running text) is multiplied by [`SCALE`] so scores read as occurrences per
//! hundred million words.

use rustc_hash::FxHashMap;
use serde_json::{Map, Number, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Multiplier applied to relative frequencies
pub const SCALE: f64 = 100_000_000.0;

/// Language used when a table row or the caller does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors raised while building a lexicon
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line_number} of the frequency table is malformed: {line:?}")]
    Malformed { line_number: usize, line: String },

    #[error("word list is not a valid JSON object: {0}")]
    WordList(#[source] serde_json::Error),

    #[error("frequency source returned {value} for '{word}'")]
    InvalidFrequency { word: String, value: f64 },

    #[error("failed to write lexicon: {0}")]
    Write(#[source] serde_json::Error),
}

/// Lookup of a word's relative frequency in a language
pub trait FrequencySource {
    /// Relative frequency of `word` in `language`; 0 for unknown words
    fn frequency(&self, word: &str, language: &str) -> f64;
}

/// Frequency table read from delimited text
///
/// Each non-comment line is either `word,frequency` (assigned to the table's
/// default language) or `language,word,frequency`. Tabs work as separators too.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: FxHashMap<(String, String), f64>,
}

impl FrequencyTable {
    /// Parse table text
    ///
    /// # Errors
    /// Returns `BuildError::Malformed` for rows with the wrong number of fields
    /// or a frequency that is not a non-negative number.
    pub fn parse(text: &str, default_language: &str) -> Result<Self, BuildError> {
        let mut entries = FxHashMap::default();

        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = || BuildError::Malformed {
                line_number: i + 1,
                line: raw.to_string(),
            };

            let fields: Vec<&str> = line.split(['\t', ',']).map(str::trim).collect();
            let (language, word, value) = match fields.as_slice() {
                [word, value] => (default_language, *word, *value),
                [language, word, value] => (*language, *word, *value),
                _ => return Err(malformed()),
            };

            let frequency: f64 = value.parse().map_err(|_| malformed())?;
            if word.is_empty() || !frequency.is_finite() || frequency < 0.0 {
                return Err(malformed());
            }

            entries
                .entry((language.to_string(), word.to_lowercase()))
                .or_insert(frequency);
        }

        Ok(Self { entries })
    }

    /// Read and parse a table file
    ///
    /// # Errors
    /// Returns `BuildError::Io` if the file cannot be read, otherwise any
    /// error from [`FrequencyTable::parse`].
    pub fn load<P: AsRef<Path>>(path: P, default_language: &str) -> Result<Self, BuildError> {
        Self::parse(&read_file(path.as_ref())?, default_language)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FrequencySource for FrequencyTable {
    fn frequency(&self, word: &str, language: &str) -> f64 {
        self.entries
            .get(&(language.to_string(), word.to_lowercase()))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Parse a word list
///
/// A document starting with `{` is read as a JSON object whose keys are the
/// words (values are ignored). Anything else is one word per line.
///
/// # Errors
/// Returns `BuildError::WordList` for an unparseable JSON document.
pub fn parse_word_list(text: &str) -> Result<Vec<String>, BuildError> {
    if text.trim_start().starts_with('{') {
        let document: Map<String, Value> =
            serde_json::from_str(text).map_err(BuildError::WordList)?;
        return Ok(document.into_iter().map(|(word, _)| word).collect());
    }

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read and parse a word list file
///
/// # Errors
/// Returns `BuildError::Io` or `BuildError::WordList`.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BuildError> {
    parse_word_list(&read_file(path.as_ref())?)
}

/// A word as it appeared in the input, with its scaled score
pub type ScoredWord = (String, f64);

/// Score every word with `source`, keeping input order and spelling
///
/// Words are not case-folded or deduplicated; the loader does that when the
/// document is read back as a lexicon.
///
/// # Errors
/// Returns `BuildError::InvalidFrequency` if the source yields a negative or
/// non-finite frequency.
///
/// # Examples
/// ```
/// use hangman_helper::wordlists::builder::{FrequencyTable, build_lexicon};
///
/// let table = FrequencyTable::parse("cat,0.5\ndog,0.25", "en").unwrap();
/// let scored = build_lexicon(["Cat", "dog", "gnu"], &table, "en").unwrap();
///
/// assert_eq!(scored[0], ("Cat".to_string(), 50_000_000.0));
/// assert_eq!(scored[2], ("gnu".to_string(), 0.0));
/// ```
pub fn build_lexicon<'a, I, S>(
    words: I,
    source: &S,
    language: &str,
) -> Result<Vec<ScoredWord>, BuildError>
where
    I: IntoIterator<Item = &'a str>,
    S: FrequencySource + ?Sized,
{
    let scored = words
        .into_iter()
        .map(|word| {
            let frequency = source.frequency(word, language);
            if !frequency.is_finite() || frequency < 0.0 {
                return Err(BuildError::InvalidFrequency {
                    word: word.to_string(),
                    value: frequency,
                });
            }
            Ok((word.to_string(), frequency * SCALE))
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("scored {} words for language '{language}'", scored.len());
    Ok(scored)
}

/// Serialize scored words as a pretty-printed JSON object
///
/// # Errors
/// Returns `BuildError::Write` if serialization or the writer fails.
pub fn write_lexicon<W: Write>(scored: &[ScoredWord], writer: W) -> Result<(), BuildError> {
    let document: Map<String, Value> = scored
        .iter()
        .map(|(word, frequency)| {
            let value = Number::from_f64(*frequency).map_or(Value::Null, Value::Number);
            (word.clone(), value)
        })
        .collect();

    serde_json::to_writer_pretty(writer, &document).map_err(BuildError::Write)
}

fn read_file(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_with_default_language() {
        let table = FrequencyTable::parse("# word,freq\ncat,0.5\n\nDog\t0.25\n", "en").unwrap();

        assert_eq!(table.len(), 2);
        assert!((table.frequency("cat", "en") - 0.5).abs() < f64::EPSILON);
        assert!((table.frequency("dog", "en") - 0.25).abs() < f64::EPSILON);
        assert!(table.frequency("cat", "fr").abs() < f64::EPSILON);
        assert!(table.frequency("emu", "en").abs() < f64::EPSILON);
    }

    #[test]
    fn table_with_language_column() {
        let table = FrequencyTable::parse("en,chat,0.001\nfr,chat,0.02", "en").unwrap();

        assert!((table.frequency("chat", "en") - 0.001).abs() < f64::EPSILON);
        assert!((table.frequency("chat", "fr") - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn table_rejects_malformed_rows() {
        assert!(matches!(
            FrequencyTable::parse("cat", "en"),
            Err(BuildError::Malformed { line_number: 1, .. })
        ));
        assert!(matches!(
            FrequencyTable::parse("cat,0.1\ndog,lots", "en"),
            Err(BuildError::Malformed { line_number: 2, .. })
        ));
        assert!(FrequencyTable::parse("cat,-0.1", "en").is_err());
        assert!(FrequencyTable::parse("a,b,c,d", "en").is_err());
    }

    #[test]
    fn word_list_from_json_keys_in_order() {
        let words = parse_word_list(r#"{"zulu": 1, "alpha": 1, "mike": 1}"#).unwrap();
        assert_eq!(words, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn word_list_from_lines() {
        let words = parse_word_list("cat\n  dog  \n\nemu\n").unwrap();
        assert_eq!(words, vec!["cat", "dog", "emu"]);
    }

    #[test]
    fn word_list_bad_json() {
        assert!(matches!(parse_word_list("{ not json"), Err(BuildError::WordList(_))));
    }

    fn score(scored: &[ScoredWord], word: &str) -> f64 {
        scored.iter().find(|(w, _)| w == word).map(|(_, f)| *f).unwrap()
    }

    #[test]
    fn build_scales_and_defaults_missing() {
        let table = FrequencyTable::parse("the,0.0537\nzephyr,0.0000000025", "en").unwrap();
        let scored = build_lexicon(["the", "zephyr", "snollygoster"], &table, "en").unwrap();

        assert!((score(&scored, "the") - 5_370_000.0).abs() < 1e-6);
        assert!((score(&scored, "zephyr") - 0.25).abs() < 1e-9);
        assert!(score(&scored, "snollygoster").abs() < f64::EPSILON);

        let words: Vec<&str> = scored.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["the", "zephyr", "snollygoster"]);
    }

    #[test]
    fn build_uses_requested_language() {
        let table = FrequencyTable::parse("en,chat,0.001\nfr,chat,0.02", "en").unwrap();
        let scored = build_lexicon(["chat"], &table, "fr").unwrap();
        assert!((score(&scored, "chat") - 2_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn build_keeps_spelling_and_duplicates() {
        let table = FrequencyTable::parse("apple,0.001", "en").unwrap();
        let scored = build_lexicon(["Apple", "apple"], &table, "en").unwrap();
        assert_eq!(
            scored,
            vec![
                ("Apple".to_string(), 100_000.0),
                ("apple".to_string(), 100_000.0)
            ]
        );

        let mut out = Vec::new();
        write_lexicon(&scored, &mut out).unwrap();
        let document: Map<String, Value> = serde_json::from_slice(&out).unwrap();
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Apple", "apple"]);
    }

    struct Broken;

    impl FrequencySource for Broken {
        fn frequency(&self, _word: &str, _language: &str) -> f64 {
            f64::NAN
        }
    }

    #[test]
    fn invalid_source_frequency_is_rejected() {
        let err = build_lexicon(["cat"], &Broken, "en").unwrap_err();
        assert!(matches!(err, BuildError::InvalidFrequency { ref word, .. } if word == "cat"));
    }

    #[test]
    fn written_document_reloads() {
        use crate::core::Lexicon;

        let table = FrequencyTable::parse("cat,0.0001\ndog,0.00005", "en").unwrap();
        let scored = build_lexicon(["dog", "cat"], &table, "en").unwrap();

        let mut out = Vec::new();
        write_lexicon(&scored, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("{\n  \"dog\": "));
        let reloaded = Lexicon::from_json_str(&text).unwrap();
        let words: Vec<&str> = reloaded.words().collect();
        assert_eq!(words, vec!["dog", "cat"]);
        assert!((reloaded.frequency("cat") - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_word_list("/no/such/words.txt").unwrap_err();
        assert!(err.to_string().contains("/no/such/words.txt"));
    }
}
