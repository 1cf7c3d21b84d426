//! Frequency-weighted ranking of letters and candidate words
//!
//! Each candidate contributes its lexicon frequency once to every distinct
//! letter it contains that is not already known. Letters are returned highest
//! score first; ties keep the order in which letters were first encountered.

use crate::core::Lexicon;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// Accumulated weight of one letter across the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterScore {
    pub letter: char,
    pub score: f64,
}

/// A candidate word with its frequency score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub frequency: f64,
}

/// Score and order the letters not yet in `known_letters`
///
/// # Examples
/// ```
/// use hangman_helper::core::Lexicon;
/// use hangman_helper::solver::rank_letters;
/// use std::collections::BTreeSet;
///
/// let lexicon = Lexicon::from_pairs([("cat", 10.0), ("car", 5.0)]).unwrap();
/// let ranked = rank_letters(&["cat", "car"], &BTreeSet::new(), &lexicon);
///
/// let letters: Vec<char> = ranked.iter().map(|s| s.letter).collect();
/// assert_eq!(letters, vec!['c', 'a', 't', 'r']);
/// assert_eq!(ranked[0].score, 15.0);
/// ```
#[must_use]
pub fn rank_letters(
    candidates: &[&str],
    known_letters: &BTreeSet<char>,
    lexicon: &Lexicon,
) -> Vec<LetterScore> {
    let mut scores: Vec<LetterScore> = Vec::new();
    let mut slots: FxHashMap<char, usize> = FxHashMap::default();

    for word in candidates {
        let weight = lexicon.frequency(word);
        let mut seen: Vec<char> = Vec::with_capacity(word.len());

        for letter in word.chars() {
            if known_letters.contains(&letter) || seen.contains(&letter) {
                continue;
            }
            seen.push(letter);

            let slot = *slots.entry(letter).or_insert_with(|| {
                scores.push(LetterScore { letter, score: 0.0 });
                scores.len() - 1
            });
            scores[slot].score += weight;
        }
    }

    // Stable sort keeps first-encountered order among equal scores
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

/// Order candidate words by frequency, most common first
#[must_use]
pub fn rank_words(candidates: &[&str], lexicon: &Lexicon) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = candidates
        .iter()
        .map(|&word| RankedWord {
            word: word.to_string(),
            frequency: lexicon.frequency(word),
        })
        .collect();

    ranked.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
    ranked
}
