//! Pattern matching against revealed letters and exclusions
//!
//! A word survives when it has the pattern's length, carries every revealed
//! letter at its position, and contains none of the excluded letters. The
//! exclusion is checked twice: per blank cell, and across the whole word. The
//! second check also covers revealed cells, so a letter that is both revealed
//! and excluded eliminates every word containing it.

use crate::core::{Cell, Pattern};
use std::collections::BTreeSet;

/// Check whether a single word is consistent with `pattern` and `excluded`
#[must_use]
pub fn word_matches(word: &str, pattern: &Pattern, excluded: &BTreeSet<char>) -> bool {
    if word.chars().count() != pattern.len() {
        return false;
    }

    for (ch, cell) in word.chars().zip(pattern.cells()) {
        match *cell {
            Cell::Letter(expected) if ch != expected => return false,
            Cell::Blank if excluded.contains(&ch) => return false,
            _ => {}
        }
    }

    !word.chars().any(|ch| excluded.contains(&ch))
}

/// Filter `words` down to the candidates consistent with `pattern` and `excluded`
///
/// Input order is preserved. An empty result is a normal outcome, not an error.
///
/// # Examples
/// ```
/// use hangman_helper::core::{Pattern, parse_letters};
/// use hangman_helper::solver::filter_candidates;
///
/// let words = ["cat", "bar", "car", "van"];
/// let pattern = Pattern::parse("_a_").unwrap();
///
/// let candidates = filter_candidates(words, &pattern, &parse_letters("b"));
/// assert_eq!(candidates, vec!["cat", "car", "van"]);
/// ```
pub fn filter_candidates<'a, I>(words: I, pattern: &Pattern, excluded: &BTreeSet<char>) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| word_matches(word, pattern, excluded))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_letters;

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    #[test]
    fn fixed_letters_must_match_position() {
        let words = ["cat", "act", "tac", "cot"];
        let result = filter_candidates(words, &pattern("c_t"), &BTreeSet::new());
        assert_eq!(result, vec!["cat", "cot"]);
    }

    #[test]
    fn length_must_match() {
        let words = ["cat", "cats", "ca", "dog"];
        let result = filter_candidates(words, &pattern("___"), &BTreeSet::new());
        assert_eq!(result, vec!["cat", "dog"]);
    }

    #[test]
    fn excluded_letters_remove_words_anywhere() {
        let words = ["cat", "bar", "car", "van"];
        let result = filter_candidates(words, &pattern("_a_"), &parse_letters("bv"));
        assert_eq!(result, vec!["cat", "car"]);
    }

    #[test]
    fn single_exclusion_keeps_other_middle_a_words() {
        // Only "bar" contains 'b'; "van" fits "_a_" and stays
        let words = ["cat", "bar", "car", "van"];
        let result = filter_candidates(words, &pattern("_a_"), &parse_letters("b"));
        assert_eq!(result, vec!["cat", "car", "van"]);
    }

    #[test]
    fn excluded_under_blank_cell() {
        assert!(!word_matches("cat", &pattern("c__"), &parse_letters("t")));
        assert!(word_matches("cap", &pattern("c__"), &parse_letters("t")));
    }

    #[test]
    fn revealed_and_excluded_letter_empties_result() {
        // Contradictory input: 'a' both revealed and excluded
        let words = ["cat", "car", "cot"];
        let result = filter_candidates(words, &pattern("_a_"), &parse_letters("a"));
        assert!(result.is_empty());
    }

    #[test]
    fn contradiction_still_removes_other_positions() {
        // 't' is revealed at the end but excluded; "tot" and "oat" both contain it
        let words = ["tot", "oat", "pop"];
        let result = filter_candidates(words, &pattern("__t"), &parse_letters("t"));
        assert!(result.is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        let words = ["alpha", "beta"];
        assert!(filter_candidates(words, &pattern("z____"), &BTreeSet::new()).is_empty());
    }

    #[test]
    fn multibyte_letters_counted_by_char() {
        let words = ["café", "cafe"];
        let result = filter_candidates(words, &pattern("___é"), &BTreeSet::new());
        assert_eq!(result, vec!["café"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let words = [
            "hangman", "hanging", "bangles", "mangled", "dangles", "tangles", "wangled",
        ];
        let p = pattern("_ang___");
        let excluded = parse_letters("bw");

        let once = filter_candidates(words, &p, &excluded);
        let twice = filter_candidates(once.iter().copied(), &p, &excluded);
        assert_eq!(once, twice);
    }

    #[test]
    fn results_respect_every_rule() {
        let words = ["master", "mister", "muster", "miters", "mostly", "faster"];
        let p = pattern("m_st__");
        let excluded = parse_letters("ou");

        for word in filter_candidates(words, &p, &excluded) {
            assert_eq!(word.chars().count(), p.len());
            for (ch, cell) in word.chars().zip(p.cells()) {
                if let Cell::Letter(expected) = cell {
                    assert_eq!(ch, *expected);
                }
            }
            assert!(!word.chars().any(|c| excluded.contains(&c)));
        }
    }
}
