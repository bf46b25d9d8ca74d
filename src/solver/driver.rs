//! Session driver for front-ends serving several games at once
//!
//! Each session is owned by the driver under its own id and shares nothing
//! mutable with the others. Weights are computed once per word length and
//! shared read-only between sessions of that length.

use super::{RoundOutcome, SolverError, SolverSession, WordWeights, weight_corpus};
use crate::core::Word;
use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Opaque handle for a session owned by a [`SessionDriver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a caller needs to begin playing a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStart {
    pub id: SessionId,
    pub guess: Word,
    pub attempt: usize,
}

/// Owns a word list and any number of independent sessions over it
pub struct SessionDriver {
    corpus: Vec<Word>,
    weights_by_length: FxHashMap<usize, Arc<WordWeights>>,
    sessions: FxHashMap<SessionId, SolverSession>,
    next_id: u64,
}

impl SessionDriver {
    #[must_use]
    pub fn new(corpus: Vec<Word>) -> Self {
        Self {
            corpus,
            weights_by_length: FxHashMap::default(),
            sessions: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Start a session for words of `length`
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCorpus` if no word has that length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::solver::{RoundOutcome, SessionDriver};
    ///
    /// let corpus = ["crane", "slate", "crate", "plate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut driver = SessionDriver::new(corpus);
    ///
    /// let start = driver.start_session(5).unwrap();
    /// assert_eq!(start.attempt, 1);
    /// assert_eq!(
    ///     driver.submit_feedback(start.id, "ggggg").unwrap(),
    ///     RoundOutcome::Solved { attempts: 1 }
    /// );
    /// ```
    pub fn start_session(&mut self, length: usize) -> Result<SessionStart, SolverError> {
        let weights = match self.weights_by_length.get(&length) {
            Some(weights) => Arc::clone(weights),
            None => {
                let weights = Arc::new(weight_corpus(&self.corpus, length)?);
                self.weights_by_length
                    .insert(length, Arc::clone(&weights));
                weights
            }
        };

        let session = SolverSession::new(weights)?;
        let id = SessionId(self.next_id);
        self.next_id += 1;

        let start = SessionStart {
            id,
            guess: session.current_guess().clone(),
            attempt: session.attempt(),
        };
        self.sessions.insert(id, session);
        debug!("started session {id} for length {length}");

        Ok(start)
    }

    /// Submit a `b`/`y`/`g` feedback string to a session
    ///
    /// # Errors
    /// `UnknownSession` for an id this driver does not hold, otherwise the
    /// errors of [`SolverSession::submit_feedback`].
    pub fn submit_feedback(
        &mut self,
        id: SessionId,
        feedback: &str,
    ) -> Result<RoundOutcome, SolverError> {
        self.sessions
            .get_mut(&id)
            .ok_or(SolverError::UnknownSession(id))?
            .submit_feedback(feedback)
    }

    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&SolverSession> {
        self.sessions.get(&id)
    }

    /// Drop a session, handing it back to the caller
    pub fn end_session(&mut self, id: SessionId) -> Option<SolverSession> {
        self.sessions.remove(&id)
    }

    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}
