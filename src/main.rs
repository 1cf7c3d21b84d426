//! Hangman Helper - CLI
//!
//! Frequency-weighted Hangman with TUI and CLI modes, and a letter-ranking
//! helper for partially revealed words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_helper::{
    commands::{BuildConfig, QueryConfig, run_build, run_query, run_simple, run_simulation},
    core::Lexicon,
    game::GameConfig,
    output::{print_build_summary, print_query_result, print_simulation_result},
    wordlists::{builder::DEFAULT_LANGUAGE, loader::load_lexicon},
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_helper",
    about = "Frequency-weighted Hangman with a letter-ranking solver helper",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lexicon JSON file (word -> frequency); defaults to the embedded sample
    #[arg(short, long, global = true, env = "HANGMAN_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Shortest word the game may choose
    #[arg(long, global = true, default_value_t = 4)]
    min_length: usize,

    /// Longest word the game may choose
    #[arg(long, global = true, default_value_t = 12)]
    max_length: usize,

    /// Misses allowed before the game is lost
    #[arg(long, global = true, default_value_t = 6)]
    max_wrong: usize,

    /// Seed for reproducible word draws
    #[arg(long, global = true, env = "HANGMAN_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - game and helper screens)
    Play,

    /// Simple CLI mode (text game without TUI)
    Simple,

    /// List words matching a pattern and rank the next letters
    Query {
        /// Pattern with '_' for unknown letters, e.g. "_a_e"
        pattern: String,

        /// Letters known not to be in the word
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,

        /// Rows to show per list
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Let the helper play many games and report how it does
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 500)]
        games: usize,
    },

    /// Build a lexicon from a word list and a frequency table
    Build {
        /// Word list: JSON object keyed by word, or one word per line
        #[arg(long)]
        words: PathBuf,

        /// Frequency table: "word,frequency" or "language,word,frequency" rows
        #[arg(long)]
        frequencies: PathBuf,

        /// Language code to look frequencies up in
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Where to write the lexicon JSON
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        if self.min_length == 0 || self.min_length > self.max_length {
            bail!(
                "invalid length band {}..={}: need 1 <= min-length <= max-length",
                self.min_length,
                self.max_length
            );
        }
        Ok(GameConfig {
            min_length: self.min_length,
            max_length: self.max_length,
            max_wrong: self.max_wrong,
        })
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    fn load_lexicon(&self) -> Result<Lexicon> {
        let lexicon = load_lexicon(self.lexicon.as_deref()).with_context(|| match &self.lexicon {
            Some(path) => format!("loading lexicon {}", path.display()),
            None => "loading embedded lexicon".to_string(),
        })?;
        log::info!("lexicon ready with {} words", lexicon.len());
        Ok(lexicon)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    let config = cli.game_config()?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // Every mode except build loads the lexicon before any session starts
    match command {
        Commands::Play => run_play_command(&cli.load_lexicon()?, config, cli.rng()),
        Commands::Simple => {
            let lexicon = cli.load_lexicon()?;
            let stats = run_simple(
                &lexicon,
                &config,
                &mut cli.rng(),
                io::stdin().lock(),
                io::stdout().lock(),
            )?;
            log::info!("simple session ended: {} of {} games won", stats.wins, stats.games_played);
            Ok(())
        }
        Commands::Query {
            pattern,
            exclude,
            limit,
            json,
        } => run_query_command(&cli.load_lexicon()?, &pattern, &exclude, limit, json),
        Commands::Simulate { games } => {
            run_simulate_command(&cli.load_lexicon()?, &config, games, cli.seed)
        }
        Commands::Build {
            words,
            frequencies,
            language,
            output,
        } => {
            let summary = run_build(&BuildConfig {
                words,
                frequencies,
                language,
                output,
            })?;
            print_build_summary(&summary);
            Ok(())
        }
    }
}

fn run_play_command(lexicon: &Lexicon, config: GameConfig, rng: StdRng) -> Result<()> {
    use hangman_helper::interactive::{App, run_tui};

    let app = App::new(lexicon, config, rng)?;
    run_tui(app)
}

fn run_query_command(
    lexicon: &Lexicon,
    pattern: &str,
    exclude: &str,
    limit: usize,
    json: bool,
) -> Result<()> {
    let mut result = run_query(lexicon, &QueryConfig::new(pattern, exclude))
        .with_context(|| format!("parsing pattern {pattern:?}"))?;

    if json {
        result.words.truncate(limit);
        result.letters.truncate(limit);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_query_result(pattern, &result, limit);
    }
    Ok(())
}

fn run_simulate_command(
    lexicon: &Lexicon,
    config: &GameConfig,
    games: usize,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Simulating {games} games (seed {seed})...");

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} games ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let result = run_simulation(lexicon, config, games, seed, &progress)?;
    progress.finish_and_clear();

    print_simulation_result(&result, config.max_wrong);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_language_defaults_to_english() {
        let cli = Cli::try_parse_from([
            "hangman_helper",
            "build",
            "--words",
            "words.txt",
            "--frequencies",
            "freq.csv",
            "-o",
            "lexicon.json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Build { language, .. }) => assert_eq!(language, DEFAULT_LANGUAGE),
            _ => panic!("expected the build subcommand"),
        }
    }

    #[test]
    fn build_language_can_be_overridden() {
        let cli = Cli::try_parse_from([
            "hangman_helper",
            "build",
            "--words",
            "w",
            "--frequencies",
            "f",
            "--language",
            "fr",
            "-o",
            "o",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Build { ref language, .. }) if language == "fr"));
    }
}
