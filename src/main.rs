//! Wordle Assist - CLI
//!
//! Suggests Wordle guesses from a weighted word list, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_assist::{
    commands::{
        SolveConfig, analyze_word, fetch_word_list, import_word_list, run_benchmark, run_simple,
        select_targets, solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::{DEFAULT_WORDS_PATH, DEFAULT_WORDS_URL, loader::load_json},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: suggests guesses by letter-frequency weight and filters on feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON word source: an array of strings
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Word length to play
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Log solver decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Stop after this many guesses
        #[arg(short = 'm', long)]
        max_guesses: Option<usize>,
    },

    /// Analyze the weight of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance on sampled target words
    Benchmark {
        /// Number of target words; all words of the length when omitted
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for sampling targets
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Convert a plain-text word list into the JSON word source
    Import {
        /// Text file with whitespace-separated words, or '-' for stdin
        input: String,

        /// Where to write the word source
        #[arg(short, long, default_value = DEFAULT_WORDS_PATH)]
        output: PathBuf,
    },

    /// Download a plain-text word list and store it as the JSON word source
    Fetch {
        /// URL of the word list
        #[arg(default_value = DEFAULT_WORDS_URL)]
        url: String,

        /// Where to write the word source
        #[arg(short, long, default_value = DEFAULT_WORDS_PATH)]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    load_json(path).with_context(|| {
        format!(
            "failed to load word list; create one with `wordle_assist fetch -o {}`",
            path.display()
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // These write the word source, so they must not require one
    match &command {
        Commands::Import { input, output } => return run_import_command(input, output),
        Commands::Fetch { url, output } => return run_fetch_command(url, output),
        _ => {}
    }

    let words = load_words(&cli.words)?;

    match command {
        Commands::Play => run_play_command(&words, cli.length),
        Commands::Simple => run_simple(&words, cli.length).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, max_guesses } => {
            run_solve_command(&word, max_guesses, cli.verbose, &words)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &words),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, cli.length, &words)
        }
        Commands::Import { .. } | Commands::Fetch { .. } => Ok(()),
    }
}

fn run_solve_command(
    word: &str,
    max_guesses: Option<usize>,
    verbose: bool,
    words: &[Word],
) -> Result<()> {
    let config = SolveConfig {
        max_guesses,
        ..SolveConfig::new(word.to_string())
    };
    let result = solve_word(config, words).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, words: &[Word]) -> Result<()> {
    let result = analyze_word(word, words).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: Option<usize>,
    seed: Option<u64>,
    length: usize,
    words: &[Word],
) -> Result<()> {
    let targets = select_targets(words, length, count, seed);
    println!(
        "Running benchmark on {} words of length {length}...",
        targets.len()
    );

    let result = run_benchmark(words, length, &targets, true).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_import_command(input: &str, output: &Path) -> Result<()> {
    let count = import_word_list(input, output)
        .with_context(|| format!("failed to import word list from {input}"))?;
    println!("Wrote {count} words to {}", output.display());
    Ok(())
}

fn run_fetch_command(url: &str, output: &Path) -> Result<()> {
    let count = fetch_word_list(url, output)
        .with_context(|| format!("failed to fetch word list from {url}"))?;
    println!("Loaded {count} words into {}", output.display());
    Ok(())
}

fn run_play_command(words: &[Word], length: usize) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(words, length)?;
    run_tui(app)
}
