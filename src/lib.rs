//! Wordle Assist
//!
//! Suggests Wordle guesses by letter-frequency weight and narrows the word
//! list with the black/yellow/green result of each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Word;
//! use wordle_assist::solver::{RoundOutcome, SolverSession};
//!
//! let words: Vec<Word> = ["crane", "slate", "crate", "plate"]
//!     .iter()
//!     .filter_map(|w| Word::new(*w).ok())
//!     .collect();
//!
//! let mut session = SolverSession::start(&words, 5).unwrap();
//! assert_eq!(session.current_guess().text(), "crate");
//!
//! // c and r are absent, a/t/e are in place
//! let outcome = session.submit_feedback("bbggg").unwrap();
//! assert!(matches!(outcome, RoundOutcome::NextGuess { remaining: 2, .. }));
//! assert_eq!(session.current_guess().text(), "plate");
//! ```

// Core domain types
pub mod core;

// Weighting and feedback sessions
pub mod solver;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
