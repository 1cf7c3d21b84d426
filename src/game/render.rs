//! Progress display for the hidden word

use std::collections::BTreeSet;

/// Placeholder shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// Render the hidden word with guessed letters upper-cased and the rest masked
///
/// # Examples
/// ```
/// use hangman_helper::game::render_progress;
/// use std::collections::BTreeSet;
///
/// let guessed = BTreeSet::from(['t', 's']);
/// assert_eq!(render_progress("test", &guessed), "T _ S T");
/// ```
#[must_use]
pub fn render_progress(word: &str, guessed: &BTreeSet<char>) -> String {
    let cells: Vec<String> = word
        .chars()
        .map(|c| {
            if guessed.contains(&c) {
                c.to_uppercase().to_string()
            } else {
                PLACEHOLDER.to_string()
            }
        })
        .collect();
    cells.join(" ")
}
