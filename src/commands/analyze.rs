//! Word analysis command
//!
//! Breaks down the heuristic weight of a word against the word list.

use crate::core::Word;
use crate::solver::{LetterFrequency, weight_corpus};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub weight: u64,
    pub raw_weight: u64,
    pub distinct_letters: u32,
    /// Corpus frequency of each letter of the word, in word order
    pub letter_frequencies: Vec<(char, u64)>,
    /// 1-based position in the initial guess order
    pub rank: usize,
    pub total_candidates: usize,
    pub best_word: String,
    pub best_weight: u64,
}

/// Analyze the weight of a word among words of the same length
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (empty or not plain ASCII letters)
/// - The word is not in the provided word list
pub fn analyze_word(word: &str, words: &[Word]) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let weights = weight_corpus(words, word_obj.len()).map_err(|e| e.to_string())?;
    if !weights.contains(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let kept: Vec<&Word> = words.iter().filter(|w| w.len() == word_obj.len()).collect();
    let frequency = LetterFrequency::from_words(kept);

    let ranked = weights.ranked();
    let rank = ranked
        .iter()
        .position(|(w, _)| *w == &word_obj)
        .map_or(ranked.len(), |i| i + 1);
    let (best_word, best_weight) = ranked
        .first()
        .map(|(w, weight)| (w.text().to_string(), *weight))
        .unwrap_or_default();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        weight: frequency.weight(&word_obj),
        raw_weight: frequency.raw_weight(&word_obj),
        distinct_letters: word_obj.distinct_letters(),
        letter_frequencies: word_obj
            .letters()
            .iter()
            .map(|&l| (char::from(l), frequency.get(l)))
            .collect(),
        rank,
        total_candidates: weights.len(),
        best_word,
        best_weight,
    })
}
