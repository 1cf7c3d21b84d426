//! Hangman game sessions
//!
//! Game state, guess evaluation and the masked progress view.

mod render;
mod session;

pub use render::{PLACEHOLDER, render_progress};
pub use session::{
    GameConfig, GameResult, GameState, GuessError, GuessOutcome, start_new_game, submit_guess,
};
