//! Error type shared by the weighter, sessions and the driver

use super::driver::SessionId;
use crate::core::FeedbackError;
use thiserror::Error;

/// Errors surfaced by the solver to its caller
///
/// None of these are retried internally. A failed call never leaves a
/// session half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No corpus word has the requested length; pick another length.
    #[error("no words of length {length} in the word list")]
    EmptyCorpus { length: usize },

    /// The feedback string was rejected; re-prompt, the session is unchanged.
    #[error(transparent)]
    InvalidFeedback(#[from] FeedbackError),

    /// Feedback was sent to a session whose candidates already ran out.
    #[error("no candidates remain; the feedback entered so far may be incorrect")]
    ExhaustedCandidates,

    /// Feedback was sent to a session that is already solved.
    #[error("already solved in {attempts} attempts")]
    AlreadySolved { attempts: usize },

    #[error("unknown session {0}")]
    UnknownSession(SessionId),
}
