//! Benchmark command
//!
//! Plays a full session against every target word and gathers statistics.
//! Sessions are independent, so targets are solved in parallel.

use crate::core::{Feedback, Word};
use crate::solver::{RoundOutcome, SolverSession, WordWeights, weight_corpus};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result from solving a single target
#[derive(Debug, Clone)]
pub struct TargetResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub solved: bool,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: Vec<String>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub hardest: Vec<(String, usize)>,
    pub first_guess: Option<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the benchmark targets: every word of `length`, or a random sample
///
/// With a `seed` the sample is reproducible.
#[must_use]
pub fn select_targets(
    words: &[Word],
    length: usize,
    count: Option<usize>,
    seed: Option<u64>,
) -> Vec<Word> {
    let mut pool: Vec<Word> = words.iter().filter(|w| w.len() == length).cloned().collect();
    pool.sort_unstable();
    pool.dedup();

    match count {
        Some(count) if count < pool.len() => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            pool.choose_multiple(&mut rng, count).cloned().collect()
        }
        _ => pool,
    }
}

/// Solve one target with a fresh session over shared weights
#[must_use]
pub fn play_target(weights: &Arc<WordWeights>, target: &Word) -> TargetResult {
    let mut guesses = Vec::new();
    let solved = match SolverSession::new(Arc::clone(weights)) {
        Ok(mut session) => loop {
            let guess = session.current_guess().clone();
            let feedback = Feedback::calculate(&guess, target);
            guesses.push(guess.text().to_string());

            match session.submit(feedback) {
                Ok(RoundOutcome::NextGuess { .. }) => {}
                Ok(RoundOutcome::Solved { .. }) => break true,
                Ok(RoundOutcome::Exhausted) | Err(_) => break false,
            }
        },
        Err(_) => false,
    };

    TargetResult {
        word: target.text().to_string(),
        guesses,
        solved,
    }
}

/// Run the benchmark on a set of target words of `length`
///
/// # Errors
///
/// Returns an error if the word list has no words of `length`.
pub fn run_benchmark(
    words: &[Word],
    length: usize,
    targets: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult, String> {
    let weights = Arc::new(weight_corpus(words, length).map_err(|e| e.to_string())?);
    let first_guess = weights.best().map(|(w, _)| w.text().to_string());

    let pb = ProgressBar::new(targets.len() as u64);
    if show_progress {
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .map_err(|e| e.to_string())?
                .progress_chars("█▓▒░"),
        );
    } else {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    let start = Instant::now();

    let results: Vec<TargetResult> = targets
        .par_iter()
        .map(|target| {
            let result = play_target(&weights, target);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(summarize(results, first_guess, duration))
}

fn summarize(
    results: Vec<TargetResult>,
    first_guess: Option<String>,
    duration: Duration,
) -> BenchmarkResult {
    let total_words = results.len();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut exhausted = Vec::new();
    let mut solved_counts = Vec::new();

    for result in &results {
        if result.solved {
            *distribution.entry(result.guesses.len()).or_insert(0) += 1;
            solved_counts.push((result.word.clone(), result.guesses.len()));
        } else {
            exhausted.push(result.word.clone());
        }
    }

    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest = solved_counts.clone();
    hardest.sort_by(|(a_word, a), (b_word, b)| b.cmp(a).then_with(|| a_word.cmp(b_word)));
    hardest.truncate(10);

    BenchmarkResult {
        total_words,
        solved,
        exhausted,
        average_guesses,
        min_guesses: solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0),
        max_guesses: solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0),
        distribution,
        hardest,
        first_guess,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_strings;

    fn corpus() -> Vec<Word> {
        words_from_strings([
            "crane", "slate", "crate", "plate", "trace", "react", "grate", "irate", "abbey",
            "moist", "pudgy", "at",
        ])
    }

    #[test]
    fn benchmark_runs() {
        let words = corpus();
        let targets = select_targets(&words, 5, None, None);
        let result = run_benchmark(&words, 5, &targets, false).unwrap();

        assert_eq!(result.total_words, 11);
        assert_eq!(result.solved + result.exhausted.len(), 11);
        assert_eq!(result.first_guess.as_deref(), Some("crate"));
        assert_eq!(result.min_guesses, 1);
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = corpus();
        let targets = select_targets(&words, 5, None, None);
        let result = run_benchmark(&words, 5, &targets, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_empty_targets() {
        let words = corpus();
        let result = run_benchmark(&words, 5, &[], false).unwrap();
        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.average_guesses, 0.0);
    }

    #[test]
    fn benchmark_unknown_length_fails() {
        assert!(run_benchmark(&corpus(), 9, &[], false).is_err());
    }

    #[test]
    fn play_target_first_guess() {
        let words = corpus();
        let weights = Arc::new(weight_corpus(&words, 5).unwrap());
        let result = play_target(&weights, &Word::new("crate").unwrap());
        assert!(result.solved);
        assert_eq!(result.guesses, vec!["crate"]);
    }

    #[test]
    fn select_targets_filters_length_and_dedups() {
        let mut words = corpus();
        words.push(Word::new("crane").unwrap());
        assert_eq!(select_targets(&words, 5, None, None).len(), 11);
        assert_eq!(select_targets(&words, 2, None, None).len(), 1);
    }

    #[test]
    fn select_targets_seeded_sample_is_reproducible() {
        let words = corpus();
        let a = select_targets(&words, 5, Some(4), Some(7));
        let b = select_targets(&words, 5, Some(4), Some(7));
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
    }
}
