//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use crate::core::Word;
use crate::solver::{RoundOutcome, SolverError, SolverSession};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// word list has no words of the requested length.
pub fn run_simple(words: &[Word], length: usize) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(words, length, &mut stdin.lock(), &mut stdout).map_err(|e| e.to_string())
}

/// Drive sessions from `input`, writing prompts and suggestions to `output`
///
/// Ends when the user quits, declines another game, or input runs out.
///
/// # Errors
///
/// Returns an I/O error from reading or writing, or `InvalidInput` wrapping
/// `SolverError::EmptyCorpus` if no word has `length` letters.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play<R: BufRead, W: Write>(
    words: &[Word],
    length: usize,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let start = || {
        SolverSession::start(words, length)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    };
    let mut session = start()?;

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                Wordle Assist - Interactive Mode              ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(
        output,
        "I'll suggest the best-weighted word among {} words of length {length}.",
        session.remaining()
    )?;
    writeln!(output, "After each guess, enter the result for every letter:\n")?;
    writeln!(output, "  - b = black (letter not in word)")?;
    writeln!(output, "  - y = yellow (in word, wrong position)")?;
    writeln!(output, "  - g = green (correct position)\n")?;
    writeln!(
        output,
        "For example, enter '{}' if only the first letter was yellow.",
        format!("y{}", "b".repeat(length - 1))
    )?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last result\n")?;

    let mut show_guess = true;

    loop {
        if show_guess {
            print_suggestion(&session, output)?;
        }
        show_guess = true;

        let Some(line) = get_user_input(input, output, "Enter result (b/y/g) or command")? else {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session = start()?;
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            "undo" | "u" => {
                if let Some(previous) = session.rewound() {
                    session = previous;
                    writeln!(output, "✓ Undone! Back to attempt {}\n", session.attempt())?;
                } else {
                    writeln!(output, "Nothing to undo!\n")?;
                    show_guess = false;
                }
                continue;
            }
            _ => {}
        }

        match session.submit_feedback(&line) {
            Ok(RoundOutcome::NextGuess { .. }) => {}
            Ok(RoundOutcome::Solved { attempts }) => {
                print_celebration(&session, attempts, output)?;

                match get_user_input(input, output, "Play again? (yes/no)")?
                    .unwrap_or_default()
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        session = start()?;
                        writeln!(output, "\n🔄 New game started!\n")?;
                    }
                    _ => {
                        writeln!(output, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                }
            }
            Ok(RoundOutcome::Exhausted) => {
                writeln!(
                    output,
                    "\n{}",
                    "❌ We cannot seem to find a solution. Are you sure the results entered are correct?"
                        .red()
                )?;
                writeln!(output, "Type 'undo' to go back, or 'new' to start over.\n")?;
                show_guess = false;
            }
            Err(SolverError::InvalidFeedback(err)) => {
                writeln!(output, "❌ {err}. Please correct the result.\n")?;
                show_guess = false;
            }
            Err(SolverError::ExhaustedCandidates) => {
                writeln!(output, "No candidates remain. Type 'undo' or 'new'.\n")?;
                show_guess = false;
            }
            Err(err) => {
                writeln!(output, "❌ {err}\n")?;
                show_guess = false;
            }
        }
    }
}

fn print_suggestion<W: Write>(session: &SolverSession, output: &mut W) -> io::Result<()> {
    let guess = session.current_guess();
    let weight = session.candidates().weight_of(guess).unwrap_or_default();

    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Attempt {}: {} candidates remaining",
        session.attempt(),
        session.remaining()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "\n📊 Enter: {}   (weight {weight})\n",
        guess.text().to_uppercase().bright_yellow().bold()
    )?;

    if session.remaining() <= 10 {
        writeln!(output, "Remaining candidates:")?;
        for (candidate, weight) in session.candidates().ranked() {
            writeln!(output, "  • {} ({weight})", candidate.text().to_uppercase())?;
        }
        writeln!(output)?;
    }
    Ok(())
}

fn print_celebration<W: Write>(
    session: &SolverSession,
    attempts: usize,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        output,
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    )?;
    writeln!(output, "{}", "═".repeat(70).bright_cyan())?;

    writeln!(
        output,
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "attempt" } else { "attempts" }
    )?;

    writeln!(output, "\n  Attempt history:")?;
    for (i, round) in session.history().iter().enumerate() {
        writeln!(
            output,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            round.guess.text().to_uppercase().bright_white().bold(),
            round.feedback.to_emoji()
        )?;
    }
    writeln!(output, "\n{}\n", "═".repeat(70).bright_cyan())
}

/// Prompt and read one trimmed line, or `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
