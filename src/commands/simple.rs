//! Simple interactive CLI mode
//!
//! Text-based Hangman without TUI. Reads one command or letter per line.

use crate::core::Lexicon;
use crate::game::{GameConfig, GameResult, GameState, GuessOutcome, start_new_game};
use crate::output::formatters::{format_letters, hangman_figure};
use crate::solver::suggest_letter;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Tally of a simple-mode session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub wins: usize,
}

/// Run the simple interactive CLI mode
///
/// Ends on `quit`, on a "no" after a finished game, or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// configured length band holds no words.
pub fn run_simple<R, I, O>(
    lexicon: &Lexicon,
    config: &GameConfig,
    rng: &mut R,
    mut input: I,
    mut output: O,
) -> Result<SessionStats>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                     Hangman - Text Mode                      ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guess the word one letter at a time.")?;
    writeln!(
        output,
        "You may miss {} times before the hangman is complete.\n",
        config.max_wrong
    )?;
    writeln!(output, "Commands: 'hint' for a suggestion, 'new' for a new game, 'quit' to exit\n")?;

    let mut stats = SessionStats::default();
    let mut game = start_new_game(lexicon, config, rng)?;

    loop {
        print_board(&mut output, &game)?;

        let Some(line) = read_input(&mut input, &mut output, "Guess a letter")? else {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(stats);
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }
            "new" => {
                writeln!(output, "\nThe word was {}.", game.chosen_word().to_uppercase())?;
                game = start_new_game(lexicon, config, rng)?;
                writeln!(output, "🔄 New game started!\n")?;
                continue;
            }
            "hint" => {
                match suggest_letter(lexicon, &game) {
                    Some(letter) => writeln!(
                        output,
                        "💡 Try {}",
                        letter.to_uppercase().to_string().bright_yellow().bold()
                    )?,
                    None => writeln!(output, "No suggestion available")?,
                }
                continue;
            }
            _ => {}
        }

        match game.guess(&line) {
            Ok(GuessOutcome::Hit) => writeln!(output, "{}", "✓ Good guess!".green())?,
            Ok(GuessOutcome::Miss) => writeln!(
                output,
                "{}",
                format!("✗ No {} in the word", line.to_uppercase()).red()
            )?,
            Ok(GuessOutcome::Won | GuessOutcome::Lost) => {}
            Err(e) => writeln!(output, "❌ {e}")?,
        }

        if game.is_over() {
            print_result(&mut output, &game)?;
            stats.games_played += 1;
            if game.result() == GameResult::Win {
                stats.wins += 1;
            }

            let again = read_input(&mut input, &mut output, "Play again? (yes/no)")?;
            if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                game = start_new_game(lexicon, config, rng)?;
                writeln!(output, "\n🔄 New game started!\n")?;
            } else {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }
        }
    }
}

fn print_board<O: Write>(output: &mut O, game: &GameState) -> Result<()> {
    writeln!(output, "{}", "─".repeat(60))?;
    writeln!(output, "{}", hangman_figure(game.guessed_wrong().len()))?;
    writeln!(output, "\nWord:   {}", game.progress().bright_white().bold())?;
    writeln!(output, "Missed: {}", format_letters(game.guessed_wrong()))?;
    writeln!(output, "Misses left: {}\n", game.wrong_remaining())?;
    Ok(())
}

fn print_result<O: Write>(output: &mut O, game: &GameState) -> Result<()> {
    let word = game.chosen_word().to_uppercase();

    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    if game.result() == GameResult::Win {
        writeln!(output, "{}", "    🎉  Y O U   W I N !  🎉    ".bright_green().bold())?;
        writeln!(
            output,
            "\n  You found {} with {} missed {}",
            word.bright_cyan().bold(),
            game.guessed_wrong().len(),
            if game.guessed_wrong().len() == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(output, "{}", hangman_figure(game.guessed_wrong().len()))?;
        writeln!(output, "{}", "    💀  G A M E   O V E R  💀    ".bright_red().bold())?;
        writeln!(output, "\n  The word was {}", word.bright_cyan().bold())?;
    }
    writeln!(output, "{}\n", "═".repeat(60).bright_cyan())?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_input<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
