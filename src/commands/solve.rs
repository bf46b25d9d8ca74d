//! Word solving command
//!
//! Plays a full session against a known target word, generating the
//! feedback for every guess, and returns the solution path.

use crate::core::{Feedback, Word};
use crate::solver::{RoundOutcome, SolverSession};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Stop after this many guesses; `None` plays until solved or exhausted
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: None,
        }
    }
}

/// How a solve run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    Exhausted,
    OutOfGuesses,
}

/// Result of solving a word
pub struct SolveResult {
    pub outcome: SolveOutcome,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    pub in_word_list: bool,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub weight: u64,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word against the given word list
///
/// The session uses the target's length. A target missing from the word
/// list is still played; the session then ends exhausted.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or not plain ASCII letters)
/// - The word list has no words of the target's length
pub fn solve_word(config: SolveConfig, words: &[Word]) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    let mut session = SolverSession::start(words, target.len()).map_err(|e| e.to_string())?;
    let in_word_list = session.candidates().contains(&target);

    let mut guesses: Vec<GuessStep> = Vec::new();

    let outcome = loop {
        if config.max_guesses.is_some_and(|max| guesses.len() >= max) {
            break SolveOutcome::OutOfGuesses;
        }

        let guess = session.current_guess().clone();
        let weight = session.candidates().weight_of(&guess).unwrap_or_default();
        let candidates_before = session.remaining();
        let feedback = Feedback::calculate(&guess, &target);

        let round = session
            .submit(feedback.clone())
            .map_err(|e| format!("Solver rejected generated feedback: {e}"))?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            weight,
            feedback,
            candidates_before,
            candidates_after: session.remaining(),
        });

        match round {
            RoundOutcome::NextGuess { .. } => {}
            RoundOutcome::Solved { .. } => break SolveOutcome::Solved,
            RoundOutcome::Exhausted => break SolveOutcome::Exhausted,
        }
    };

    Ok(SolveResult {
        outcome,
        guesses,
        target: target.text().to_string(),
        in_word_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_strings;

    fn corpus() -> Vec<Word> {
        words_from_strings([
            "crane", "slate", "crate", "plate", "trace", "react", "grate", "irate", "abbey",
        ])
    }

    #[test]
    fn solve_word_succeeds() {
        let result = solve_word(SolveConfig::new("plate".to_string()), &corpus()).unwrap();

        assert!(result.success());
        assert!(result.in_word_list);
        assert_eq!(result.guesses.last().unwrap().word, "plate");
        assert!(result.guesses.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_records_history() {
        let result = solve_word(SolveConfig::new("grate".to_string()), &corpus()).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_uppercase_target() {
        let result = solve_word(SolveConfig::new("CRATE".to_string()), &corpus()).unwrap();
        assert_eq!(result.target, "crate");
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_very_long_repeated_letter_word() {
        let long = "a".repeat(300);
        let words = words_from_strings([long.clone()]);
        let result = solve_word(SolveConfig::new(long), &words).unwrap();

        assert!(result.success());
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        assert!(solve_word(SolveConfig::new("cr4te".to_string()), &corpus()).is_err());
    }

    #[test]
    fn solve_unknown_length_returns_error() {
        assert!(solve_word(SolveConfig::new("cats".to_string()), &corpus()).is_err());
    }

    #[test]
    fn solve_target_outside_word_list_exhausts() {
        let result = solve_word(SolveConfig::new("zzzzz".to_string()), &corpus()).unwrap();
        assert!(!result.in_word_list);
        assert_eq!(result.outcome, SolveOutcome::Exhausted);
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut config = SolveConfig::new("abbey".to_string());
        config.max_guesses = Some(1);

        let result = solve_word(config, &corpus()).unwrap();

        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.outcome, SolveOutcome::OutOfGuesses);
    }
}
