//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod fetch;
pub mod import;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use fetch::{FetchError, fetch_word_list};
pub use import::import_word_list;
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveOutcome, SolveResult, solve_word};
