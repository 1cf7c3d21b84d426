//! One-shot helper query
//!
//! Parses a pattern and excluded letters from the command line and returns the
//! ranked candidates.

use crate::core::{Lexicon, Pattern, PatternError, parse_letters};
use crate::solver::{HelperQuery, QueryResult, query};

/// Parsed query arguments
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub pattern: String,
    pub exclude: String,
}

impl QueryConfig {
    #[must_use]
    pub fn new(pattern: impl Into<String>, exclude: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            exclude: exclude.into(),
        }
    }

    /// Build the helper query
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern text is empty or holds a character
    /// that is neither a letter nor a wildcard.
    pub fn to_query(&self) -> Result<HelperQuery, PatternError> {
        let pattern = Pattern::parse(&self.pattern)?;
        Ok(HelperQuery::new(pattern, parse_letters(&self.exclude)))
    }
}

/// Run a helper query against the lexicon
///
/// # Errors
/// Returns `PatternError` for an unparseable pattern.
pub fn run_query(lexicon: &Lexicon, config: &QueryConfig) -> Result<QueryResult, PatternError> {
    let request = config.to_query()?;
    Ok(query(lexicon, &request))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_pairs([("cat", 10.0), ("bar", 5.0), ("car", 8.0), ("van", 2.0)]).unwrap()
    }

    #[test]
    fn query_from_text() {
        let result = run_query(&lexicon(), &QueryConfig::new("_A_", "B")).unwrap();

        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "car", "van"]);
        assert_eq!(result.best_letter(), Some('c'));
    }

    #[test]
    fn exclusions_ignore_separators() {
        let result = run_query(&lexicon(), &QueryConfig::new("?a?", "b, t, n")).unwrap();
        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["car"]);
    }

    #[test]
    fn bad_pattern_is_an_error() {
        assert!(run_query(&lexicon(), &QueryConfig::new("", "")).is_err());
        assert!(run_query(&lexicon(), &QueryConfig::new("c4t", "")).is_err());
    }

    #[test]
    fn result_serializes_to_json() {
        let result = run_query(&lexicon(), &QueryConfig::new("c_t", "")).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["words"][0]["word"], "cat");
        assert_eq!(json["words"][0]["frequency"], 10.0);
        assert_eq!(json["letters"][0]["letter"], "a");
    }
}
