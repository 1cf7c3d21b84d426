//! Lexicon loading utilities
//!
//! Provides functions to load a lexicon from a file or use the embedded sample.

use super::SAMPLE_LEXICON;
use crate::core::{Lexicon, LexiconError};
use std::path::Path;

/// Parse the embedded sample lexicon
///
/// # Errors
///
/// Returns `LexiconError` only if the bundled document is malformed.
///
/// # Examples
/// ```
/// use hangman_helper::wordlists::loader::sample_lexicon;
///
/// let lexicon = sample_lexicon().unwrap();
/// assert!(lexicon.contains("hangman"));
/// ```
pub fn sample_lexicon() -> Result<Lexicon, LexiconError> {
    let lexicon = Lexicon::from_json_str(SAMPLE_LEXICON)?;
    log::debug!("loaded {} entries from the embedded lexicon", lexicon.len());
    Ok(lexicon)
}

/// Load the lexicon at `path`, or the embedded sample when no path is given
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be read, or a parse error if
/// it is not a JSON object of word frequencies.
///
/// # Examples
/// ```no_run
/// use hangman_helper::wordlists::loader::load_lexicon;
/// use std::path::Path;
///
/// let lexicon = load_lexicon(Some(Path::new("data/lexicon.json"))).unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_lexicon(path: Option<&Path>) -> Result<Lexicon, LexiconError> {
    match path {
        Some(path) => Lexicon::load(path),
        None => sample_lexicon(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_uses_sample() {
        let lexicon = load_lexicon(None).unwrap();
        assert_eq!(lexicon.len(), sample_lexicon().unwrap().len());
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_lexicon(Some(Path::new("/no/such/lexicon.json"))).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        assert!(err.to_string().contains("/no/such/lexicon.json"));
    }
}
