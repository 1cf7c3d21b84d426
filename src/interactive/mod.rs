//! Interactive TUI interface
//!
//! A game screen and a helper screen sharing one lexicon. Tab switches
//! between them.

mod app;
mod rendering;

pub use app::{App, HelperField, HelperState, INITIAL_ROWS, SHOW_MORE_STEP, Screen, run_tui};
