//! Core domain types for Wordle
//!
//! Words, feedback and the per-round constraints built from them. Nothing in
//! here keeps state between rounds.

mod constraints;
mod feedback;
mod word;

pub use constraints::RoundConstraints;
pub use feedback::{Feedback, FeedbackError, FeedbackSymbol};
pub use word::{Word, WordError, letter_index};
