//! Corpus letter-frequency weighting
//!
//! Every word of the chosen length is scored once, when a session starts:
//! the sum of the corpus frequency of each of its letters, multiplied by the
//! number of distinct letters it contains. Words with repeated letters test
//! fewer letters per guess and so rank lower.
//!
//! The scores are never recomputed as candidates are eliminated.

use super::SolverError;
use crate::core::{RoundConstraints, Word, letter_index};
use log::info;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Occurrences of each letter across a word list
///
/// A letter appearing twice in one word counts twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequency([u64; 26]);

impl LetterFrequency {
    /// Count letters across `words`
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts = [0u64; 26];
        for word in words {
            for &letter in word.letters() {
                counts[letter_index(letter)] += 1;
            }
        }
        Self(counts)
    }

    /// Frequency of a lowercase ASCII letter
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u64 {
        self.0[letter_index(letter)]
    }

    /// Sum of the frequencies of every letter of `word`, repeats included
    #[must_use]
    pub fn raw_weight(&self, word: &Word) -> u64 {
        word.letters().iter().map(|&letter| self.get(letter)).sum()
    }

    /// Heuristic weight: raw weight times the count of distinct letters
    #[must_use]
    pub fn weight(&self, word: &Word) -> u64 {
        self.raw_weight(word) * u64::from(word.distinct_letters())
    }
}

/// Candidate words of a single length mapped to their frozen weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordWeights {
    length: usize,
    weights: FxHashMap<Word, u64>,
}

impl WordWeights {
    /// Word length shared by every candidate
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.weights.contains_key(word)
    }

    #[must_use]
    pub fn weight_of(&self, word: &Word) -> Option<u64> {
        self.weights.get(word).copied()
    }

    /// Iterate over candidates in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Word, u64)> {
        self.weights.iter().map(|(word, &weight)| (word, weight))
    }

    /// The highest-weighted candidate
    ///
    /// Ties go to the lexicographically smallest word, so the choice does not
    /// depend on hash iteration order.
    #[must_use]
    pub fn best(&self) -> Option<(&Word, u64)> {
        self.iter()
            .max_by(|(a_word, a_weight), (b_word, b_weight)| {
                a_weight.cmp(b_weight).then_with(|| b_word.cmp(a_word))
            })
    }

    /// All candidates from best to worst, using the same tie-break as `best`
    #[must_use]
    pub fn ranked(&self) -> Vec<(&Word, u64)> {
        let mut ranked: Vec<(&Word, u64)> = self.iter().collect();
        ranked.sort_unstable_by_key(|&(word, weight)| (Reverse(weight), word));
        ranked
    }

    /// Remove every candidate the constraints rule out
    ///
    /// Only removes entries; weights are left untouched.
    pub fn retain_admitted(&mut self, constraints: &RoundConstraints) {
        let mut entries: Vec<(Word, u64)> = self.weights.drain().collect();
        constraints.retain(&mut entries, |(word, _)| word);
        self.weights.extend(entries);
    }
}

/// Weight every word of `length` in the corpus
///
/// Words of other lengths are ignored. Letter frequencies are counted over
/// the kept words only; duplicate corpus entries count each time they appear.
///
/// # Errors
/// Returns `SolverError::EmptyCorpus` if no word has the requested length.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::weight_corpus;
///
/// let words: Vec<Word> = ["crane", "slate", "crate", "plate", "at"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let weights = weight_corpus(&words, 5).unwrap();
///
/// assert_eq!(weights.len(), 4);
/// assert_eq!(weights.best().unwrap().0.text(), "crate");
/// assert!(weight_corpus(&words, 7).is_err());
/// ```
pub fn weight_corpus(words: &[Word], length: usize) -> Result<WordWeights, SolverError> {
    let kept: Vec<&Word> = words.iter().filter(|w| w.len() == length).collect();
    if kept.is_empty() {
        return Err(SolverError::EmptyCorpus { length });
    }

    let frequency = LetterFrequency::from_words(kept.iter().copied());

    let weights: FxHashMap<Word, u64> = kept
        .into_iter()
        .map(|word| (word.clone(), frequency.weight(word)))
        .collect();

    info!(
        "weighted {} candidate words of length {length}",
        weights.len()
    );

    Ok(WordWeights { length, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn letter_frequency_counts_repeats() {
        let freq = LetterFrequency::from_words(&words(&["sissy", "silly"]));
        assert_eq!(freq.get(b's'), 4);
        assert_eq!(freq.get(b'i'), 2);
        assert_eq!(freq.get(b'l'), 2);
        assert_eq!(freq.get(b'y'), 2);
        assert_eq!(freq.get(b'z'), 0);
    }

    #[test]
    fn weights_match_hand_computation() {
        // c:2 r:2 a:4 n:1 e:4 s:1 l:2 t:3 p:1
        let weights = weight_corpus(&words(&["crane", "slate", "crate", "plate"]), 5).unwrap();
        assert_eq!(weights.weight_of(&word("crane")), Some(65));
        assert_eq!(weights.weight_of(&word("slate")), Some(70));
        assert_eq!(weights.weight_of(&word("crate")), Some(75));
        assert_eq!(weights.weight_of(&word("plate")), Some(70));
    }

    #[test]
    fn repeated_letters_are_penalised() {
        let freq = LetterFrequency::from_words(&words(&["sissy", "silly"]));
        // sissy: (4+2+4+4+2) * 3 distinct
        assert_eq!(freq.raw_weight(&word("sissy")), 16);
        assert_eq!(freq.weight(&word("sissy")), 48);
        // silly: (4+2+2+2+2) * 4 distinct
        assert_eq!(freq.weight(&word("silly")), 48);
    }

    #[test]
    fn only_requested_length_is_kept() {
        let weights = weight_corpus(&words(&["at", "ox", "cat", "dogs"]), 2).unwrap();
        assert_eq!(weights.len(), 2);
        assert_eq!(weights.length(), 2);
        assert!(weights.iter().all(|(w, _)| w.len() == 2));
        assert!(!weights.contains(&word("cat")));
    }

    #[test]
    fn empty_corpus_for_missing_length() {
        assert_eq!(
            weight_corpus(&words(&["crane"]), 6),
            Err(SolverError::EmptyCorpus { length: 6 })
        );
        assert_eq!(
            weight_corpus(&[], 5),
            Err(SolverError::EmptyCorpus { length: 5 })
        );
    }

    #[test]
    fn duplicate_entries_count_twice_but_map_once() {
        let weights = weight_corpus(&words(&["ab", "ab", "cd"]), 2).unwrap();
        assert_eq!(weights.len(), 2);
        // a:2 b:2, two distinct letters
        assert_eq!(weights.weight_of(&word("ab")), Some(8));
        assert_eq!(weights.weight_of(&word("cd")), Some(4));
    }

    #[test]
    fn weighting_is_idempotent() {
        let corpus = words(&["crane", "slate", "sissy", "silly", "abcde"]);
        assert_eq!(
            weight_corpus(&corpus, 5).unwrap(),
            weight_corpus(&corpus, 5).unwrap()
        );
    }

    #[test]
    fn best_breaks_ties_lexicographically() {
        let weights = weight_corpus(&words(&["sissy", "silly"]), 5).unwrap();
        assert_eq!(weights.best(), Some((&word("silly"), 48)));
    }

    #[test]
    fn ranked_orders_by_weight_then_word() {
        let weights = weight_corpus(&words(&["crane", "slate", "crate", "plate"]), 5).unwrap();
        let ranked: Vec<&str> = weights.ranked().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(ranked, vec!["crate", "plate", "slate", "crane"]);
    }

    #[test]
    fn retain_admitted_only_removes() {
        let mut weights =
            weight_corpus(&words(&["crane", "slate", "crate", "plate"]), 5).unwrap();
        let before = weights.clone();

        let constraints = RoundConstraints::derive(
            &word("crate"),
            &crate::core::Feedback::parse("bbggg", 5).unwrap(),
        );
        weights.retain_admitted(&constraints);

        assert_eq!(weights.len(), 2);
        for (w, weight) in weights.iter() {
            assert_eq!(before.weight_of(w), Some(weight));
        }
    }
}
