//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Gallows drawings for 0 through 6 misses
const HANGMAN_STAGES: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Hangman drawing for a number of misses, capped at the full figure
#[must_use]
pub fn hangman_figure(wrong_guesses: usize) -> &'static str {
    HANGMAN_STAGES[wrong_guesses.min(HANGMAN_STAGES.len() - 1)]
}

/// Upper-cased, space separated letters, or "None"
#[must_use]
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return "None".to_string();
    }
    letters
        .iter()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a frequency score the way the helper lists it (no decimals)
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_grows_with_misses() {
        assert!(!hangman_figure(0).contains('O'));
        assert!(hangman_figure(1).contains('O'));
        assert!(hangman_figure(6).contains("/ \\"));
    }

    #[test]
    fn figure_is_capped() {
        assert_eq!(hangman_figure(6), hangman_figure(60));
    }

    #[test]
    fn letters_formatting() {
        assert_eq!(format_letters(&BTreeSet::new()), "None");
        assert_eq!(format_letters(&BTreeSet::from(['z', 'a', 'q'])), "A Q Z");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_has_no_decimals() {
        assert_eq!(format_score(1_234.6), "1235");
        assert_eq!(format_score(0.0), "0");
    }
}
