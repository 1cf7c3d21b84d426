//! Partially revealed word template
//!
//! A pattern holds one cell per letter of the hidden word. Each cell is either
//! a revealed letter or a blank. The text form uses `_` (or `.`/`?`) for
//! blanks, so `"_a_"` is a three-letter word with `a` in the middle.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single position in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Letter known to occupy this position
    Letter(char),
    /// Position not yet revealed
    Blank,
}

impl Cell {
    /// Returns the revealed letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(c),
            Self::Blank => None,
        }
    }
}

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must contain at least one cell")]
    Empty,
    #[error("invalid character '{ch}' at position {position}; use letters or '_'")]
    InvalidCell { ch: char, position: usize },
}

/// Positional template of revealed letters and blanks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    /// Create an all-blank pattern of the given length
    ///
    /// # Errors
    /// Returns `PatternError::Empty` if `len` is zero.
    pub fn blank(len: usize) -> Result<Self, PatternError> {
        if len == 0 {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            cells: vec![Cell::Blank; len],
        })
    }

    /// Build a pattern from explicit cells
    ///
    /// # Errors
    /// Returns `PatternError::Empty` if no cells are given.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, PatternError> {
        if cells.is_empty() {
            return Err(PatternError::Empty);
        }
        let cells = cells
            .into_iter()
            .map(|cell| match cell {
                Cell::Letter(c) => Cell::Letter(fold_case(c)),
                Cell::Blank => Cell::Blank,
            })
            .collect();
        Ok(Self { cells })
    }

    /// Build the pattern a player sees for `word` after guessing `revealed`
    ///
    /// Returns `None` for an empty word.
    #[must_use]
    pub fn revealed(word: &str, revealed: &BTreeSet<char>) -> Option<Self> {
        let cells: Vec<Cell> = word
            .chars()
            .map(|c| {
                if revealed.contains(&c) {
                    Cell::Letter(c)
                } else {
                    Cell::Blank
                }
            })
            .collect();
        Self::from_cells(cells).ok()
    }

    /// Parse a pattern such as `"_a_"` or `"H_NGM_N"`
    ///
    /// # Errors
    /// Returns `PatternError` for an empty string or a character that is
    /// neither a letter nor a blank marker.
    ///
    /// # Examples
    /// ```
    /// use hangman_helper::core::{Cell, Pattern};
    ///
    /// let pattern = Pattern::parse("_A_").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.cells()[1], Cell::Letter('a'));
    /// assert_eq!(pattern.to_string(), "_a_");
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let cells = text
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '_' | '.' | '?' => Ok(Cell::Blank),
                c if c.is_alphabetic() => Ok(Cell::Letter(c)),
                c => Err(PatternError::InvalidCell { ch: c, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(cells)
    }

    /// Number of cells (the hidden word's length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; patterns have at least one cell
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Distinct revealed letters
    #[must_use]
    pub fn letters(&self) -> BTreeSet<char> {
        self.cells.iter().copied().filter_map(Cell::letter).collect()
    }

    /// True when no blanks remain
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| matches!(c, Cell::Letter(_)))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Cell::Letter(c) => write!(f, "{c}")?,
                Cell::Blank => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a string of letters into a set, ignoring separators
///
/// Accepts inputs like `"xqz"`, `"X, Q, Z"` or `"x q z"`. Non-alphabetic
/// characters are skipped.
#[must_use]
pub fn parse_letters(text: &str) -> BTreeSet<char> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .map(fold_case)
        .collect()
}

/// Lower-case a single character, keeping it as-is if it expands
pub(crate) fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
