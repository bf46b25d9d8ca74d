//! Display functions for command results

use super::formatters::{create_progress_bar, plural, weight_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveOutcome, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.in_word_list {
        println!(
            "{}",
            "Note: target is not in the word list".yellow()
        );
    }

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nAttempt {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Weight:     {}", step.weight);
        }
    }

    println!();
    match result.outcome {
        SolveOutcome::Solved => println!(
            "{}",
            format!("✅ Solved in {}!", plural(result.guesses.len(), "guess", "guesses"))
                .green()
                .bold()
        ),
        SolveOutcome::Exhausted => println!(
            "{}",
            format!(
                "❌ No candidates left after {}",
                plural(result.guesses.len(), "guess", "guesses")
            )
            .red()
            .bold()
        ),
        SolveOutcome::OutOfGuesses => println!(
            "{}",
            format!("❌ Failed to solve in {}", plural(result.guesses.len(), "guess", "guesses"))
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WEIGHT ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = weight_bar(result.weight, result.best_weight, 30);

    println!(
        "\n📊 Against {} words of length {}:",
        result.total_candidates,
        result.word.len()
    );
    println!(
        "   Weight:      [{}] {}",
        bar.green(),
        result.weight.to_string().bright_yellow()
    );
    println!(
        "   Raw weight:  {} × {} distinct letters",
        result.raw_weight, result.distinct_letters
    );
    println!(
        "   Rank:        {} of {}",
        result.rank, result.total_candidates
    );
    println!(
        "   Best word:   {} ({})",
        result.best_word.to_uppercase(),
        result.best_weight
    );

    println!("\n🔤 Letter frequencies:");
    for (letter, frequency) in &result.letter_frequencies {
        println!("   {}  {frequency}", letter.to_ascii_uppercase());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    if let Some(first) = &result.first_guess {
        println!("   First guess:      {}", first.to_uppercase());
    }
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    if !result.exhausted.is_empty() {
        println!(
            "   Exhausted:        {}",
            result.exhausted.len().to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in result.min_guesses..=result.max_guesses {
            let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !result.exhausted.is_empty() {
        println!("\n❌ {}", "Exhausted (no candidates left):".red().bold());
        for word in result.exhausted.iter().take(10) {
            println!("   {}", word.to_uppercase().red());
        }
    }
}
