//! Candidate weighting and the feedback-driven solving loop

mod driver;
mod error;
mod session;
mod weights;

pub use driver::{SessionDriver, SessionId, SessionStart};
pub use error::SolverError;
pub use session::{RoundOutcome, RoundRecord, SessionState, SolverSession};
pub use weights::{LetterFrequency, WordWeights, weight_corpus};
