//! Command implementations

pub mod build;
pub mod query;
pub mod simple;
pub mod simulate;

pub use build::{BuildConfig, BuildSummary, run_build};
pub use query::{QueryConfig, run_query};
pub use simple::{SessionStats, run_simple};
pub use simulate::{SimulationResult, play_game, run_simulation};
