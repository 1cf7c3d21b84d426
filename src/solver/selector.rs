//! Frequency-weighted random word selection
//!
//! Every eligible word gets weight `frequency + EPSILON`. The weights are
//! normalized into a cumulative distribution and sampled by inverting it with
//! a single uniform draw, so common words come up often while rare and
//! zero-frequency words keep a small but non-zero chance.

use crate::core::{Lexicon, is_alphabetic_word};
use rand::Rng;
use thiserror::Error;

/// Weight added to every frequency so zero-frequency words stay drawable
pub const EPSILON: f64 = 1e-6;

/// Error type for word selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no alphabetic word with length between {min_length} and {max_length}")]
    EmptyCandidateSet { min_length: usize, max_length: usize },
}

/// Precomputed sampling table for one lexicon and length band
///
/// Building the table is linear in the lexicon size; each draw afterwards is a
/// binary search over the cumulative probabilities.
#[derive(Debug, Clone)]
pub struct WordSelector<'a> {
    words: Vec<&'a str>,
    cumulative: Vec<f64>,
}

impl<'a> WordSelector<'a> {
    /// Build the sampling table for words with `min_length..=max_length` characters
    ///
    /// # Errors
    /// Returns `SelectError::EmptyCandidateSet` if no alphabetic word falls in the band.
    pub fn new(
        lexicon: &'a Lexicon,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, SelectError> {
        let (words, weights): (Vec<&str>, Vec<f64>) = lexicon
            .entries()
            .filter(|(word, _)| {
                let len = word.chars().count();
                (min_length..=max_length).contains(&len) && is_alphabetic_word(word)
            })
            .map(|(word, frequency)| (word, frequency + EPSILON))
            .unzip();

        if words.is_empty() {
            return Err(SelectError::EmptyCandidateSet {
                min_length,
                max_length,
            });
        }

        // Scale by the largest weight first so the sum stays finite
        let largest = weights.iter().copied().fold(EPSILON, f64::max);
        let scaled: Vec<f64> = weights.iter().map(|w| w / largest).collect();
        let total: f64 = scaled.iter().sum();

        let mut running = 0.0;
        let mut cumulative: Vec<f64> = scaled
            .iter()
            .map(|w| {
                running += w / total;
                running
            })
            .collect();

        // Rounding can leave the tail a hair below 1.0
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        log::debug!(
            "selector built: {} words in length band {min_length}..={max_length}",
            words.len()
        );

        Ok(Self { words, cumulative })
    }

    /// Number of words eligible for selection
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction fails on an empty band
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Probability of drawing the word at `index`
    #[must_use]
    pub fn probability(&self, index: usize) -> Option<f64> {
        let upper = *self.cumulative.get(index)?;
        let lower = if index == 0 {
            0.0
        } else {
            self.cumulative[index - 1]
        };
        Some(upper - lower)
    }

    /// Draw one word
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        let u: f64 = rng.random();
        let index = self
            .cumulative
            .partition_point(|&c| c <= u)
            .min(self.words.len() - 1);
        self.words[index]
    }
}

/// Draw a single word from `lexicon` with length in `min_length..=max_length`
///
/// # Errors
/// Returns `SelectError::EmptyCandidateSet` if no word satisfies the bounds.
///
/// # Examples
/// ```
/// use hangman_helper::core::Lexicon;
/// use hangman_helper::solver::select;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let lexicon = Lexicon::from_pairs([("hangman", 50.0), ("ox", 10.0)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let word = select(&lexicon, 4, 12, &mut rng).unwrap();
/// assert_eq!(word, "hangman");
/// assert!(select(&lexicon, 20, 30, &mut rng).is_err());
/// ```
pub fn select<'a, R: Rng + ?Sized>(
    lexicon: &'a Lexicon,
    min_length: usize,
    max_length: usize,
    rng: &mut R,
) -> Result<&'a str, SelectError> {
    let word = WordSelector::new(lexicon, min_length, max_length)?.draw(rng);
    log::debug!("selected word of length {}", word.chars().count());
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashMap;

    fn sample_lexicon() -> Lexicon {
        Lexicon::from_pairs([
            ("cat", 10.0),
            ("tiger", 400.0),
            ("zebra", 100.0),
            ("lion", 0.0),
            ("panther", 1000.0),
            ("hippopotamus", 5.0),
            ("e-mail", 900.0),
        ])
        .unwrap()
    }

    #[test]
    fn select_respects_length_band() {
        let lexicon = sample_lexicon();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let word = select(&lexicon, 4, 7, &mut rng).unwrap();
            let len = word.chars().count();
            assert!((4..=7).contains(&len), "'{word}' outside band");
        }
    }

    #[test]
    fn select_skips_non_alphabetic_words() {
        let lexicon = sample_lexicon();

        // "e-mail" is the only six-character entry
        assert!(WordSelector::new(&lexicon, 6, 6).is_err());
        assert_eq!(WordSelector::new(&lexicon, 1, 20).unwrap().len(), 6);
    }

    #[test]
    fn empty_band_is_an_error() {
        let lexicon = sample_lexicon();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            select(&lexicon, 13, 20, &mut rng),
            Err(SelectError::EmptyCandidateSet {
                min_length: 13,
                max_length: 20
            })
        );
        assert!(select(&lexicon, 8, 4, &mut rng).is_err());
        assert!(select(&Lexicon::default(), 1, 100, &mut rng).is_err());
    }

    #[test]
    fn zero_frequency_words_keep_positive_probability() {
        let lexicon = Lexicon::from_pairs([("lion", 0.0), ("tiger", 1_000_000.0)]).unwrap();
        let selector = WordSelector::new(&lexicon, 1, 10).unwrap();

        let lion = selector.probability(0).unwrap();
        assert!(lion > 0.0);
        assert!(lion < 1e-9);
    }

    #[test]
    fn huge_frequencies_do_not_overflow() {
        let lexicon = Lexicon::from_pairs([("aaaa", 1e308), ("bbbb", 1e308)]).unwrap();
        let selector = WordSelector::new(&lexicon, 1, 10).unwrap();

        for i in 0..2 {
            let p = selector.probability(i).unwrap();
            assert!((p - 0.5).abs() < 1e-9, "word {i} has probability {p}");
        }

        let mut rng = StdRng::seed_from_u64(11);
        let firsts = (0..1000).filter(|_| selector.draw(&mut rng) == "aaaa").count();
        assert!((350..=650).contains(&firsts), "'aaaa' drawn {firsts} times");
    }

    #[test]
    fn all_zero_frequencies_are_uniform() {
        let lexicon = Lexicon::from_pairs([("ab", 0.0), ("cd", 0.0), ("ef", 0.0), ("gh", 0.0)]).unwrap();
        let selector = WordSelector::new(&lexicon, 1, 10).unwrap();

        for i in 0..4 {
            let p = selector.probability(i).unwrap();
            assert!((p - 0.25).abs() < 1e-9);
        }
        assert!(selector.probability(4).is_none());
    }

    #[test]
    fn probabilities_sum_to_one() {
        let lexicon = sample_lexicon();
        let selector = WordSelector::new(&lexicon, 1, 20).unwrap();
        let total: f64 = (0..selector.len()).filter_map(|i| selector.probability(i)).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empirical_frequency_follows_weights() {
        let lexicon = Lexicon::from_pairs([
            ("rare", 1.0),
            ("uncommon", 10.0),
            ("common", 100.0),
            ("frequent", 1000.0),
        ])
        .unwrap();
        let selector = WordSelector::new(&lexicon, 1, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for _ in 0..20_000 {
            *counts.entry(selector.draw(&mut rng)).or_insert(0) += 1;
        }

        let rare = counts.get("rare").copied().unwrap_or(0);
        let uncommon = counts.get("uncommon").copied().unwrap_or(0);
        let common = counts.get("common").copied().unwrap_or(0);
        let frequent = counts.get("frequent").copied().unwrap_or(0);

        assert!(rare <= uncommon);
        assert!(uncommon <= common);
        assert!(common <= frequent);

        // 1000 / 1111 of the mass
        let share = frequent as f64 / 20_000.0;
        assert!((share - 0.9).abs() < 0.02, "frequent share {share}");
    }

    #[test]
    fn single_word_always_drawn() {
        let lexicon = Lexicon::from_pairs([("only", 0.0)]).unwrap();
        let selector = WordSelector::new(&lexicon, 1, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            assert_eq!(selector.draw(&mut rng), "only");
        }
    }
}
