//! Helper queries: candidate words and suggested letters
//!
//! The helper has no state of its own. Every query takes the current pattern
//! and excluded letters and recomputes the candidate set from the lexicon.

use super::matcher::filter_candidates;
use super::ranker::{LetterScore, RankedWord, rank_letters, rank_words};
use crate::core::{Lexicon, Pattern};
use crate::game::GameState;
use serde::Serialize;
use std::collections::BTreeSet;

/// Inputs to a helper query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperQuery {
    pub pattern: Pattern,
    pub excluded: BTreeSet<char>,
}

impl HelperQuery {
    #[must_use]
    pub const fn new(pattern: Pattern, excluded: BTreeSet<char>) -> Self {
        Self { pattern, excluded }
    }

    /// The query a player of `game` would ask: revealed letters plus misses
    ///
    /// Returns `None` if the game has an empty word.
    #[must_use]
    pub fn from_game(game: &GameState) -> Option<Self> {
        let pattern = Pattern::revealed(game.chosen_word(), game.guessed_correct())?;
        Some(Self::new(pattern, game.guessed_wrong().clone()))
    }

    /// Letters that should not be suggested again
    #[must_use]
    pub fn known_letters(&self) -> BTreeSet<char> {
        let mut known = self.pattern.letters();
        known.extend(self.excluded.iter().copied());
        known
    }
}

/// Ranked candidates and letter suggestions for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub words: Vec<RankedWord>,
    pub letters: Vec<LetterScore>,
}

impl QueryResult {
    /// Best letter to guess next, if any candidate remains
    #[must_use]
    pub fn best_letter(&self) -> Option<char> {
        self.letters.first().map(|s| s.letter)
    }
}

/// Run a helper query against the lexicon's alphabetic words
///
/// # Examples
/// ```
/// use hangman_helper::core::{Lexicon, Pattern, parse_letters};
/// use hangman_helper::solver::{HelperQuery, query};
///
/// let lexicon = Lexicon::from_pairs([("cat", 10.0), ("bar", 5.0), ("car", 8.0)]).unwrap();
/// let request = HelperQuery::new(Pattern::parse("_a_").unwrap(), parse_letters("b"));
///
/// let result = query(&lexicon, &request);
/// assert_eq!(result.words[0].word, "cat");
/// assert_eq!(result.best_letter(), Some('c'));
/// ```
#[must_use]
pub fn query(lexicon: &Lexicon, request: &HelperQuery) -> QueryResult {
    let candidates = filter_candidates(lexicon.alphabetic_words(), &request.pattern, &request.excluded);
    let words = rank_words(&candidates, lexicon);

    // A fully revealed pattern leaves nothing to guess
    let letters = if request.pattern.is_complete() {
        Vec::new()
    } else {
        rank_letters(&candidates, &request.known_letters(), lexicon)
    };

    log::debug!(
        "query {} excluding {:?}: {} words, {} letters",
        request.pattern,
        request.excluded,
        words.len(),
        letters.len()
    );

    QueryResult { words, letters }
}

/// Suggest the next letter for an in-progress game
///
/// Falls back to the first unguessed letter of the English alphabet when the
/// chosen word is unknown to the lexicon and no candidate survives.
#[must_use]
pub fn suggest_letter(lexicon: &Lexicon, game: &GameState) -> Option<char> {
    let request = HelperQuery::from_game(game)?;
    query(lexicon, &request).best_letter().or_else(|| {
        ('a'..='z').find(|c| {
            !game.guessed_correct().contains(c) && !game.guessed_wrong().contains(c)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_letters;

    fn zoo() -> Lexicon {
        Lexicon::from_pairs([("cat", 10.0), ("bar", 5.0), ("car", 8.0), ("van", 2.0)]).unwrap()
    }

    #[test]
    fn query_scenario() {
        let lexicon = zoo();
        let request = HelperQuery::new(Pattern::parse("_a_").unwrap(), parse_letters("b"));
        let result = query(&lexicon, &request);

        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "car", "van"]);

        // 'a' is revealed and 'b' excluded, so neither is suggested
        assert!(result.letters.iter().all(|s| s.letter != 'a' && s.letter != 'b'));
        assert_eq!(result.best_letter(), Some('c'));
        assert_eq!(result.letters[0].score, 18.0);
    }

    #[test]
    fn query_skips_non_alphabetic_entries() {
        let lexicon = Lexicon::from_pairs([("a-b", 100.0), ("cab", 1.0)]).unwrap();
        let request = HelperQuery::new(Pattern::blank(3).unwrap(), BTreeSet::new());
        let result = query(&lexicon, &request);

        assert_eq!(result.words.len(), 1);
        assert_eq!(result.words[0].word, "cab");
    }

    #[test]
    fn query_without_matches_is_empty() {
        let lexicon = zoo();
        let request = HelperQuery::new(Pattern::parse("____").unwrap(), BTreeSet::new());
        let result = query(&lexicon, &request);

        assert!(result.words.is_empty());
        assert!(result.letters.is_empty());
        assert_eq!(result.best_letter(), None);
    }

    #[test]
    fn complete_pattern_lists_word_without_letters() {
        let lexicon = zoo();
        let request = HelperQuery::new(Pattern::parse("cat").unwrap(), parse_letters("b"));
        let result = query(&lexicon, &request);

        assert_eq!(result.words.len(), 1);
        assert_eq!(result.words[0].word, "cat");
        assert!(result.letters.is_empty());
        assert_eq!(result.best_letter(), None);
    }

    #[test]
    fn known_letters_combine_pattern_and_exclusions() {
        let request = HelperQuery::new(Pattern::parse("t__t").unwrap(), parse_letters("xq"));
        assert_eq!(request.known_letters(), BTreeSet::from(['q', 't', 'x']));
    }

    #[test]
    fn from_game_uses_revealed_and_wrong_letters() {
        let mut game = GameState::new("test", 6);
        game.guess("t").unwrap();
        game.guess("x").unwrap();

        let request = HelperQuery::from_game(&game).unwrap();
        assert_eq!(request.pattern.to_string(), "t__t");
        assert_eq!(request.excluded, BTreeSet::from(['x']));
    }

    #[test]
    fn suggestion_is_never_a_repeat() {
        let lexicon =
            Lexicon::from_pairs([("test", 50.0), ("text", 40.0), ("tent", 30.0), ("tart", 1.0)])
                .unwrap();
        let mut game = GameState::new("test", 6);
        game.guess("t").unwrap();

        let letter = suggest_letter(&lexicon, &game).unwrap();
        assert_eq!(letter, 'e');
    }

    #[test]
    fn suggestion_falls_back_to_alphabet() {
        let lexicon = Lexicon::from_pairs([("zzz", 1.0)]).unwrap();
        let mut game = GameState::new("abc", 6);
        game.guess("a").unwrap();

        assert_eq!(suggest_letter(&lexicon, &game), Some('b'));
    }
}
