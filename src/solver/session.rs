//! The solving loop for a single hidden word
//!
//! A session is a caller-driven step function: it holds the current guess
//! and waits for feedback on it. Each accepted feedback either solves the
//! session, exhausts it, or narrows the candidates and yields the next guess.

use super::{SolverError, WordWeights, weight_corpus};
use crate::core::{Feedback, FeedbackError, RoundConstraints, Word};
use log::{debug, info, warn};
use std::sync::Arc;

/// Where a session stands between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A guess has been emitted and feedback on it is expected
    AwaitingFeedback,
    /// The last guess was all-correct
    Solved { attempts: usize },
    /// Feedback ruled out every candidate
    Exhausted,
}

/// Result of one accepted round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Candidates remain; play `guess` as attempt number `attempt`
    NextGuess {
        guess: Word,
        attempt: usize,
        remaining: usize,
    },
    Solved {
        attempts: usize,
    },
    Exhausted,
}

/// One committed round, kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Live solver state for one hidden word
#[derive(Debug, Clone)]
pub struct SolverSession {
    initial: Arc<WordWeights>,
    candidates: WordWeights,
    guess: Word,
    attempt: usize,
    state: SessionState,
    history: Vec<RoundRecord>,
}

impl SolverSession {
    /// Weight the corpus for `length` and start a session on it
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCorpus` if no word has that length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::solver::{RoundOutcome, SolverSession};
    ///
    /// let words: Vec<Word> = ["crane", "slate", "crate", "plate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut session = SolverSession::start(&words, 5).unwrap();
    /// assert_eq!(session.current_guess().text(), "crate");
    ///
    /// let outcome = session.submit_feedback("GGGGG").unwrap();
    /// assert_eq!(outcome, RoundOutcome::Solved { attempts: 1 });
    /// ```
    pub fn start(words: &[Word], length: usize) -> Result<Self, SolverError> {
        Self::new(Arc::new(weight_corpus(words, length)?))
    }

    /// Start a session from precomputed weights
    ///
    /// The weights are shared, never modified; the session works on its own
    /// copy of the candidates.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCorpus` if `weights` has no candidates.
    pub fn new(weights: Arc<WordWeights>) -> Result<Self, SolverError> {
        let guess = match weights.best() {
            Some((word, weight)) => {
                debug!("first guess {word} (weight {weight})");
                word.clone()
            }
            None => {
                return Err(SolverError::EmptyCorpus {
                    length: weights.length(),
                });
            }
        };

        info!(
            "session started: {} candidates of length {}",
            weights.len(),
            weights.length()
        );

        Ok(Self {
            candidates: (*weights).clone(),
            initial: weights,
            guess,
            attempt: 1,
            state: SessionState::AwaitingFeedback,
            history: Vec::new(),
        })
    }

    /// Word length for this session
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.candidates.length()
    }

    /// The guess awaiting feedback, or the final guess once finished
    #[inline]
    #[must_use]
    pub const fn current_guess(&self) -> &Word {
        &self.guess
    }

    /// 1-based number of the current attempt
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self.state, SessionState::AwaitingFeedback)
    }

    /// Remaining candidates with their frozen weights
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &WordWeights {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Rounds committed so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Parse a `b`/`y`/`g` feedback string for the current guess and apply it
    ///
    /// # Errors
    /// - `InvalidFeedback` if the string has the wrong length or a symbol
    ///   outside `{b, y, g}`; the session is left untouched
    /// - `AlreadySolved` / `ExhaustedCandidates` if the session is finished
    pub fn submit_feedback(&mut self, input: &str) -> Result<RoundOutcome, SolverError> {
        self.ensure_awaiting()?;
        let feedback = Feedback::parse(input, self.length())?;
        Ok(self.commit(feedback))
    }

    /// Apply already-parsed feedback for the current guess
    ///
    /// # Errors
    /// Same as [`SolverSession::submit_feedback`].
    pub fn submit(&mut self, feedback: Feedback) -> Result<RoundOutcome, SolverError> {
        self.ensure_awaiting()?;
        if feedback.len() != self.length() {
            return Err(FeedbackError::InvalidLength {
                expected: self.length(),
                actual: feedback.len(),
            }
            .into());
        }
        Ok(self.commit(feedback))
    }

    /// A new session equal to this one without its last committed round
    ///
    /// Rebuilt by replaying the recorded feedback against the initial
    /// weights; `self` is not modified. Returns `None` when nothing has been
    /// committed yet.
    #[must_use]
    pub fn rewound(&self) -> Option<Self> {
        let (_, kept) = self.history.split_last()?;
        let mut session = Self::new(Arc::clone(&self.initial)).ok()?;
        for record in kept {
            session.submit(record.feedback.clone()).ok()?;
        }
        Some(session)
    }

    fn ensure_awaiting(&self) -> Result<(), SolverError> {
        match self.state {
            SessionState::AwaitingFeedback => Ok(()),
            SessionState::Solved { attempts } => Err(SolverError::AlreadySolved { attempts }),
            SessionState::Exhausted => Err(SolverError::ExhaustedCandidates),
        }
    }

    fn commit(&mut self, feedback: Feedback) -> RoundOutcome {
        let candidates_before = self.candidates.len();

        if feedback.is_solved() {
            self.history.push(RoundRecord {
                guess: self.guess.clone(),
                feedback,
                candidates_before,
                candidates_after: candidates_before,
            });
            self.state = SessionState::Solved {
                attempts: self.attempt,
            };
            info!("solved '{}' in {} attempts", self.guess, self.attempt);
            return RoundOutcome::Solved {
                attempts: self.attempt,
            };
        }

        let constraints = RoundConstraints::derive(&self.guess, &feedback);
        debug!("attempt {}: {} -> {constraints:?}", self.attempt, self.guess);
        self.candidates.retain_admitted(&constraints);

        let candidates_after = self.candidates.len();
        self.history.push(RoundRecord {
            guess: self.guess.clone(),
            feedback,
            candidates_before,
            candidates_after,
        });

        let Some((next, weight)) = self.candidates.best() else {
            self.state = SessionState::Exhausted;
            warn!(
                "no candidates remain after attempt {} ({candidates_before} before)",
                self.attempt
            );
            return RoundOutcome::Exhausted;
        };

        debug!("next guess {next} (weight {weight}), {candidates_after} candidates");
        self.guess = next.clone();
        self.attempt += 1;

        RoundOutcome::NextGuess {
            guess: self.guess.clone(),
            attempt: self.attempt,
            remaining: candidates_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn session(list: &[&str]) -> SolverSession {
        let corpus = words(list);
        SolverSession::start(&corpus, corpus[0].len()).unwrap()
    }

    #[test]
    fn first_guess_is_best_weight() {
        let s = session(&["crane", "slate", "crate", "plate"]);
        assert_eq!(s.current_guess().text(), "crate");
        assert_eq!(s.attempt(), 1);
        assert_eq!(s.state(), SessionState::AwaitingFeedback);
    }

    #[test]
    fn solved_on_first_attempt() {
        let mut s = session(&["crane", "slate", "crate", "plate"]);
        assert_eq!(
            s.submit_feedback("ggggg").unwrap(),
            RoundOutcome::Solved { attempts: 1 }
        );
        assert_eq!(s.state(), SessionState::Solved { attempts: 1 });
        assert!(s.is_finished());
        assert_eq!(s.remaining(), 4);
    }

    #[test]
    fn narrows_then_solves() {
        // hidden word "plate": crate -> bbggg
        let mut s = session(&["crane", "slate", "crate", "plate"]);
        let outcome = s.submit_feedback("bbggg").unwrap();
        assert_eq!(
            outcome,
            RoundOutcome::NextGuess {
                guess: Word::new("plate").unwrap(),
                attempt: 2,
                remaining: 2,
            }
        );
        assert_eq!(
            s.submit_feedback("ggggg").unwrap(),
            RoundOutcome::Solved { attempts: 2 }
        );
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0].candidates_before, 4);
        assert_eq!(s.history()[0].candidates_after, 2);
    }

    #[test]
    fn exhausted_when_nothing_survives() {
        let mut s = session(&["abcde"]);
        assert_eq!(s.submit_feedback("bbbbb").unwrap(), RoundOutcome::Exhausted);
        assert_eq!(s.state(), SessionState::Exhausted);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.attempt(), 1);
    }

    #[test]
    fn finished_sessions_reject_feedback() {
        let mut s = session(&["abcde"]);
        s.submit_feedback("bbbbb").unwrap();
        assert_eq!(
            s.submit_feedback("ggggg"),
            Err(SolverError::ExhaustedCandidates)
        );

        let mut s = session(&["abcde"]);
        s.submit_feedback("ggggg").unwrap();
        assert_eq!(
            s.submit_feedback("ggggg"),
            Err(SolverError::AlreadySolved { attempts: 1 })
        );
    }

    #[test]
    fn invalid_feedback_leaves_session_untouched() {
        let mut s = session(&["crane", "slate", "crate", "plate"]);
        let before = s.candidates().clone();

        assert_eq!(
            s.submit_feedback("bbgg"),
            Err(SolverError::InvalidFeedback(FeedbackError::InvalidLength {
                expected: 5,
                actual: 4
            }))
        );
        assert_eq!(
            s.submit_feedback("bbgxg"),
            Err(SolverError::InvalidFeedback(FeedbackError::InvalidSymbol {
                symbol: 'x',
                position: 3
            }))
        );

        assert_eq!(s.candidates(), &before);
        assert_eq!(s.attempt(), 1);
        assert!(s.history().is_empty());
        assert_eq!(s.state(), SessionState::AwaitingFeedback);
    }

    #[test]
    fn submit_checks_feedback_length() {
        let mut s = session(&["crane", "slate"]);
        assert!(matches!(
            s.submit(Feedback::parse("gggg", 4).unwrap()),
            Err(SolverError::InvalidFeedback(FeedbackError::InvalidLength { .. }))
        ));
    }

    #[test]
    fn rewound_replays_all_but_last_round() {
        let mut s = session(&["crane", "slate", "crate", "plate"]);
        assert!(s.rewound().is_none());

        s.submit_feedback("bbggg").unwrap();
        let back = s.rewound().unwrap();

        assert_eq!(back.attempt(), 1);
        assert_eq!(back.remaining(), 4);
        assert_eq!(back.current_guess().text(), "crate");
        // the source session is untouched
        assert_eq!(s.attempt(), 2);
        assert_eq!(s.remaining(), 2);
    }

    #[test]
    fn rewound_recovers_from_exhaustion() {
        let mut s = session(&["crane", "slate", "crate", "plate"]);
        s.submit_feedback("bbggg").unwrap();
        assert_eq!(s.submit_feedback("bbbbb").unwrap(), RoundOutcome::Exhausted);

        let back = s.rewound().unwrap();
        assert_eq!(back.state(), SessionState::AwaitingFeedback);
        assert_eq!(back.attempt(), 2);
        assert_eq!(back.current_guess().text(), "plate");
    }
}
