//! Lexicon build command
//!
//! Reads a word list and a frequency table, scores every word and writes the
//! lexicon document.

use crate::wordlists::builder::{
    BuildError, FrequencyTable, ScoredWord, build_lexicon, load_word_list, write_lexicon,
};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Inputs of a build run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub words: PathBuf,
    pub frequencies: PathBuf,
    pub language: String,
    pub output: PathBuf,
}

/// What a build run produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub total_words: usize,
    /// Words the frequency table knew about
    pub scored_words: usize,
}

impl BuildSummary {
    #[must_use]
    pub fn unscored_words(&self) -> usize {
        self.total_words - self.scored_words
    }
}

/// Score the words in memory, advancing `progress` once per word
///
/// # Errors
/// Returns `BuildError` if a frequency is unusable.
pub fn build_with_progress(
    words: &[String],
    table: &FrequencyTable,
    language: &str,
    progress: &ProgressBar,
) -> Result<Vec<ScoredWord>, BuildError> {
    let words = words.iter().map(String::as_str).progress_with(progress.clone());
    let scored = build_lexicon(words, table, language)?;
    progress.finish_and_clear();
    Ok(scored)
}

/// Run the full build: read inputs, score, write the output file
///
/// # Errors
/// Returns an error if an input cannot be read or parsed, or if the output
/// cannot be written.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary> {
    let words = load_word_list(&config.words)
        .with_context(|| format!("loading word list {}", config.words.display()))?;
    let table = FrequencyTable::load(&config.frequencies, &config.language)
        .with_context(|| format!("loading frequency table {}", config.frequencies.display()))?;

    log::info!(
        "scoring {} words against {} table rows ({})",
        words.len(),
        table.len(),
        config.language
    );

    let progress = ProgressBar::new(words.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} words")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let scored = build_with_progress(&words, &table, &config.language, &progress)?;

    write_output(&scored, &config.output)?;

    let scored_words = scored.iter().filter(|(_, f)| *f > 0.0).count();
    log::debug!("wrote {} entries to {}", scored.len(), config.output.display());

    Ok(BuildSummary {
        output: config.output.clone(),
        total_words: scored.len(),
        scored_words,
    })
}

fn write_output(scored: &[ScoredWord], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_lexicon(scored, &mut writer)?;
    writeln!(writer)?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
