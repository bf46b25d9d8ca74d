//! Per-guess feedback representation and parsing
//!
//! Feedback is one symbol per letter position of the guess:
//! - `b` = Absent (black, letter not in word)
//! - `y` = Present (yellow, letter in word, wrong position)
//! - `g` = Correct (green, letter in correct position)

use super::Word;
use super::word::letter_index;
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Absent,
    Present,
    Correct,
}

impl FeedbackSymbol {
    /// Parse from a character, case-insensitive
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(Self::Absent),
            'y' => Some(Self::Present),
            'g' => Some(Self::Correct),
            _ => None,
        }
    }

    /// The canonical lowercase code for this symbol
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Absent => 'b',
            Self::Present => 'y',
            Self::Correct => 'g',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error raised when a feedback string cannot be accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must be {expected} symbols long, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid feedback symbol '{symbol}' at position {position}; use b, y or g")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Feedback for a whole guess, one symbol per letter position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<FeedbackSymbol>);

impl Feedback {
    /// Parse a `b`/`y`/`g` feedback string for a word of `length` letters
    ///
    /// Surrounding whitespace is ignored and symbols are case-insensitive.
    /// The length is checked before any symbol.
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if the symbol count differs
    /// from `length`, or `FeedbackError::InvalidSymbol` for the first symbol
    /// outside `{b, y, g}`.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, FeedbackSymbol};
    ///
    /// let feedback = Feedback::parse("bYg", 3).unwrap();
    /// assert_eq!(feedback.symbols()[1], FeedbackSymbol::Present);
    ///
    /// assert!(Feedback::parse("bygg", 3).is_err());
    /// assert!(Feedback::parse("byx", 3).is_err());
    /// ```
    pub fn parse(input: &str, length: usize) -> Result<Self, FeedbackError> {
        let input = input.trim();
        let actual = input.chars().count();
        if actual != length {
            return Err(FeedbackError::InvalidLength {
                expected: length,
                actual,
            });
        }

        input
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                FeedbackSymbol::from_char(symbol)
                    .ok_or(FeedbackError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Calculate the feedback when `guess` is played against the hidden `answer`
    ///
    /// Implements Wordle's rules, including duplicate letters: exact matches
    /// are marked first and consume the answer's letters, then the remaining
    /// guess letters are marked Present while unconsumed copies remain.
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "bbgbg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must share a length");

        let mut result = vec![FeedbackSymbol::Absent; guess.len()];
        let mut answer_available = answer.letter_counts();

        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                result[i] = FeedbackSymbol::Correct;
                answer_available[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == FeedbackSymbol::Absent {
                let count = &mut answer_available[letter_index(g)];
                if *count > 0 {
                    result[i] = FeedbackSymbol::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[FeedbackSymbol] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == FeedbackSymbol::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn parse_valid_mixed_case() {
        let feedback = Feedback::parse("GyB", 3).unwrap();
        assert_eq!(
            feedback.symbols(),
            &[
                FeedbackSymbol::Correct,
                FeedbackSymbol::Present,
                FeedbackSymbol::Absent
            ]
        );
        assert_eq!(feedback.to_string(), "gyb");
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(Feedback::parse("  ggggg\n", 5).unwrap().is_solved());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Feedback::parse("ggg", 5),
            Err(FeedbackError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            Feedback::parse("", 5),
            Err(FeedbackError::InvalidLength {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn parse_checks_length_before_symbols() {
        assert!(matches!(
            Feedback::parse("xxxxxx", 5),
            Err(FeedbackError::InvalidLength { .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        assert_eq!(
            Feedback::parse("gg-gg", 5),
            Err(FeedbackError::InvalidSymbol {
                symbol: '-',
                position: 2
            })
        );
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        assert!(matches!(
            Feedback::parse("🟩🟩🟩", 3),
            Err(FeedbackError::InvalidSymbol { position: 0, .. })
        ));
    }

    #[test]
    fn calculate_all_absent() {
        let feedback = Feedback::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(feedback.to_string(), "bbbbb");
        assert!(!feedback.is_solved());
    }

    #[test]
    fn calculate_self_is_solved() {
        for w in ["crane", "sissy", "aaaaa", "at"] {
            assert!(Feedback::calculate(&word(w), &word(w)).is_solved());
        }
    }

    #[test]
    fn calculate_duplicate_green_takes_priority() {
        // ROBOT vs FLOOR: first O is yellow, second O is green
        let feedback = Feedback::calculate(&word("robot"), &word("floor"));
        assert_eq!(feedback.to_string(), "yybgb");
    }

    #[test]
    fn calculate_extra_copies_are_absent() {
        // SISSY vs SILLY: only one S in the answer, consumed by the green
        let feedback = Feedback::calculate(&word("sissy"), &word("silly"));
        assert_eq!(feedback.to_string(), "ggbbg");
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::parse("gyb", 3).unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛");
    }

    #[test]
    fn calculate_long_run_of_one_letter() {
        let long = word(&"a".repeat(300));
        let feedback = Feedback::calculate(&long, &long);
        assert_eq!(feedback.len(), 300);
        assert!(feedback.is_solved());
    }
}
