//! Self-play simulation command
//!
//! The helper plays many games against words drawn by the selector. Each game
//! is an independent session with its own seeded RNG, so games run in parallel
//! and the results are reproducible for a given seed.

use crate::core::Lexicon;
use crate::game::{GameConfig, GameResult, GameState};
use crate::solver::{SelectError, WordSelector, suggest_letter};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a simulation run
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_guesses: f64,
    pub average_wrong: f64,
    /// Number of games per miss count
    pub wrong_distribution: BTreeMap<usize, usize>,
    /// Words the helper failed to find, in game order
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Let the helper guess until the game ends
///
/// Each turn asks the helper for the best letter given the revealed pattern
/// and the misses so far.
#[must_use]
pub fn play_game(lexicon: &Lexicon, mut game: GameState) -> GameState {
    while !game.is_over() {
        let Some(letter) = suggest_letter(lexicon, &game) else {
            break;
        };
        if let Err(e) = game.guess(&letter.to_string()) {
            log::warn!("helper suggestion '{letter}' rejected: {e}");
            break;
        }
    }
    game
}

/// Play `games` helper-driven games
///
/// Game `i` uses seed `seed + i`. `progress` is advanced once per game.
///
/// # Errors
///
/// Returns `SelectError::EmptyCandidateSet` if the configured length band has
/// no words.
pub fn run_simulation(
    lexicon: &Lexicon,
    config: &GameConfig,
    games: usize,
    seed: u64,
    progress: &ProgressBar,
) -> Result<SimulationResult, SelectError> {
    let selector = WordSelector::new(lexicon, config.min_length, config.max_length)?;
    let start = Instant::now();

    let finished: Vec<GameState> = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let game = GameState::from_selector(&selector, config.max_wrong, &mut rng);
            let game = play_game(lexicon, game);
            progress.inc(1);
            game
        })
        .collect();

    let duration = start.elapsed();

    let mut wins = 0;
    let mut total_guesses = 0;
    let mut total_wrong = 0;
    let mut wrong_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut lost_words = Vec::new();

    for game in &finished {
        let wrong = game.guessed_wrong().len();
        total_wrong += wrong;
        total_guesses += wrong + game.guessed_correct().len();
        *wrong_distribution.entry(wrong).or_insert(0) += 1;

        if game.result() == GameResult::Win {
            wins += 1;
        } else {
            lost_words.push(game.chosen_word().to_string());
        }
    }

    let total_games = finished.len();
    let divisor = total_games.max(1) as f64;
    log::debug!("simulated {total_games} games in {:.2}s", duration.as_secs_f64());

    Ok(SimulationResult {
        total_games,
        wins,
        losses: total_games - wins,
        average_guesses: total_guesses as f64 / divisor,
        average_wrong: total_wrong as f64 / divisor,
        wrong_distribution,
        lost_words,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
