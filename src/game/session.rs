//! Game state and guess evaluation
//!
//! A `GameState` is a plain value: the driver keeps it between interactions
//! and feeds each guess through [`GameState::guess`] (or the by-value
//! [`submit_guess`]). `Win` and `Lose` are terminal.

use crate::core::{Lexicon, fold_case};
use crate::solver::{SelectError, WordSelector};
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Length band and miss allowance for new games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub max_wrong: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 12,
            max_wrong: 6,
        }
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    Win,
    Lose,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Win => write!(f, "won"),
            Self::Lose => write!(f, "lost"),
        }
    }
}

/// Effect of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; game continues
    Hit,
    /// Letter is not in the word; game continues
    Miss,
    /// Letter completed the word
    Won,
    /// Letter used up the last allowed miss
    Lost,
}

/// A rejected guess; the game state is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{0}' is not a single letter")]
    InvalidInput(String),
    #[error("'{0}' was already guessed")]
    AlreadyGuessed(char),
    #[error("the game is over ({0}); start a new game")]
    GameOver(GameResult),
}

/// One game of Hangman
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    chosen_word: String,
    letters: BTreeSet<char>,
    guessed_correct: BTreeSet<char>,
    guessed_wrong: BTreeSet<char>,
    max_wrong_allowed: usize,
    result: GameResult,
}

impl GameState {
    /// Start a game with a known word
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::game::{GameResult, GameState, GuessOutcome};
    ///
    /// let mut game = GameState::new("dog", 1);
    /// assert_eq!(game.guess("x"), Ok(GuessOutcome::Lost));
    /// assert_eq!(game.result(), GameResult::Lose);
    /// ```
    #[must_use]
    pub fn new(word: impl Into<String>, max_wrong_allowed: usize) -> Self {
        let chosen_word = word.into().to_lowercase();
        let letters = chosen_word.chars().collect();

        Self {
            chosen_word,
            letters,
            guessed_correct: BTreeSet::new(),
            guessed_wrong: BTreeSet::new(),
            max_wrong_allowed,
            result: GameResult::InProgress,
        }
    }

    /// Start a game with a word drawn from a prepared selector
    pub fn from_selector<R: Rng + ?Sized>(
        selector: &WordSelector<'_>,
        max_wrong_allowed: usize,
        rng: &mut R,
    ) -> Self {
        Self::new(selector.draw(rng), max_wrong_allowed)
    }

    /// Evaluate a guess and update the state
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the game has been won or lost
    /// - `GuessError::InvalidInput` unless `input` is exactly one letter
    /// - `GuessError::AlreadyGuessed` for a repeated letter
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.result != GameResult::InProgress {
            return Err(GuessError::GameOver(self.result));
        }

        let letter = parse_guess(input)?;

        if self.guessed_correct.contains(&letter) || self.guessed_wrong.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        if self.letters.contains(&letter) {
            self.guessed_correct.insert(letter);
            if self.guessed_correct.is_superset(&self.letters) {
                self.result = GameResult::Win;
                return Ok(GuessOutcome::Won);
            }
            Ok(GuessOutcome::Hit)
        } else {
            self.guessed_wrong.insert(letter);
            if self.guessed_wrong.len() >= self.max_wrong_allowed {
                self.result = GameResult::Lose;
                return Ok(GuessOutcome::Lost);
            }
            Ok(GuessOutcome::Miss)
        }
    }

    #[inline]
    #[must_use]
    pub fn chosen_word(&self) -> &str {
        &self.chosen_word
    }

    #[inline]
    #[must_use]
    pub const fn guessed_correct(&self) -> &BTreeSet<char> {
        &self.guessed_correct
    }

    #[inline]
    #[must_use]
    pub const fn guessed_wrong(&self) -> &BTreeSet<char> {
        &self.guessed_wrong
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong_allowed(&self) -> usize {
        self.max_wrong_allowed
    }

    #[inline]
    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result != GameResult::InProgress
    }

    /// Misses left before the game is lost
    #[must_use]
    pub fn wrong_remaining(&self) -> usize {
        self.max_wrong_allowed.saturating_sub(self.guessed_wrong.len())
    }

    /// Masked view of the word, e.g. `"T _ S T"`
    #[must_use]
    pub fn progress(&self) -> String {
        super::render::render_progress(&self.chosen_word, &self.guessed_correct)
    }
}

fn parse_guess(input: &str) -> Result<char, GuessError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(fold_case(c)),
        _ => Err(GuessError::InvalidInput(input.to_string())),
    }
}

/// Draw a fresh word and start a new game
///
/// # Errors
/// Returns `SelectError::EmptyCandidateSet` if the lexicon has no word in the
/// configured length band.
pub fn start_new_game<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    config: &GameConfig,
    rng: &mut R,
) -> Result<GameState, SelectError> {
    let selector = WordSelector::new(lexicon, config.min_length, config.max_length)?;
    Ok(GameState::from_selector(&selector, config.max_wrong, rng))
}

/// By-value form of [`GameState::guess`] for drivers that pass state around
///
/// On error the returned state equals the input state.
#[must_use]
pub fn submit_guess(
    mut state: GameState,
    letter: &str,
) -> (GameState, Result<GuessOutcome, GuessError>) {
    let outcome = state.guess(letter);
    (state, outcome)
}
