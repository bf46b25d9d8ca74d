//! Per-round constraints derived from a guess and its feedback
//!
//! The constraints are transient: they are rebuilt from scratch for every
//! round and applied once to the candidate set.

use super::{Feedback, FeedbackSymbol, Word};
use log::debug;

/// Position-indexed letters split by feedback symbol
///
/// Each position of the guess lands in exactly one of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundConstraints {
    /// Letters marked Correct, with their position
    pub correct: Vec<(usize, u8)>,
    /// Letters marked Absent, with the position they were reported at
    pub excluded_at: Vec<(usize, u8)>,
    /// Letters marked Present, with the position they must not occupy
    pub included_at: Vec<(usize, u8)>,
}

impl RoundConstraints {
    /// Derive the constraints for one round
    ///
    /// # Panics
    /// Panics in debug mode if `guess` and `feedback` differ in length.
    #[must_use]
    pub fn derive(guess: &Word, feedback: &Feedback) -> Self {
        debug_assert_eq!(guess.len(), feedback.len());

        let mut constraints = Self::default();
        for (position, (&letter, &symbol)) in
            guess.letters().iter().zip(feedback.symbols()).enumerate()
        {
            let bucket = match symbol {
                FeedbackSymbol::Correct => &mut constraints.correct,
                FeedbackSymbol::Absent => &mut constraints.excluded_at,
                FeedbackSymbol::Present => &mut constraints.included_at,
            };
            bucket.push((position, letter));
        }
        constraints
    }

    /// Letters reported Absent that are not also Correct somewhere
    ///
    /// A letter that is Correct at one position and Absent at another is a
    /// duplicate-letter signal, not a sign that the letter is missing.
    #[must_use]
    pub fn only_excluded_letters(&self) -> u32 {
        let correct_mask = letter_mask(&self.correct);
        letter_mask(&self.excluded_at) & !correct_mask
    }

    /// Apply the four elimination rules in order, keeping the survivors
    ///
    /// 1. drop words containing any only-excluded letter anywhere
    /// 2. drop words with an excluded letter at its excluded position
    /// 3. drop words missing a correct letter at its position
    /// 4. drop words missing an included letter, or holding it at the
    ///    position where it was reported Present
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, RoundConstraints, Word};
    ///
    /// let guess = Word::new("sissy").unwrap();
    /// let feedback = Feedback::parse("ggbbg", 5).unwrap();
    /// let constraints = RoundConstraints::derive(&guess, &feedback);
    ///
    /// let mut candidates = vec![Word::new("silly").unwrap(), Word::new("sassy").unwrap()];
    /// constraints.retain(&mut candidates, |w| w);
    /// assert_eq!(candidates, vec![Word::new("silly").unwrap()]);
    /// ```
    pub fn retain<T>(&self, candidates: &mut Vec<T>, word_of: impl Fn(&T) -> &Word) {
        let only_excluded = self.only_excluded_letters();

        candidates.retain(|c| word_of(c).letter_mask() & only_excluded == 0);
        debug!("after only-excluded letters: {}", candidates.len());

        candidates.retain(|c| !self.has_excluded_at_position(word_of(c)));
        debug!("after excluded positions: {}", candidates.len());

        candidates.retain(|c| self.has_all_correct(word_of(c)));
        debug!("after correct positions: {}", candidates.len());

        candidates.retain(|c| self.satisfies_included(word_of(c)));
        debug!("after included letters: {}", candidates.len());
    }

    fn has_excluded_at_position(&self, word: &Word) -> bool {
        self.excluded_at
            .iter()
            .any(|&(position, letter)| word.char_at(position) == letter)
    }

    fn has_all_correct(&self, word: &Word) -> bool {
        self.correct
            .iter()
            .all(|&(position, letter)| word.char_at(position) == letter)
    }

    fn satisfies_included(&self, word: &Word) -> bool {
        self.included_at
            .iter()
            .all(|&(_, letter)| word.has_letter(letter))
            && !self
                .included_at
                .iter()
                .any(|&(position, letter)| word.char_at(position) == letter)
    }
}

fn letter_mask(entries: &[(usize, u8)]) -> u32 {
    entries
        .iter()
        .fold(0, |mask, &(_, letter)| mask | (1 << (letter - b'a')))
}
