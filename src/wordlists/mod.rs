//! Word lists for Wordle solving
//!
//! The solver consumes a word source: a JSON array of lowercase words kept on
//! disk. [`loader::parse_text_list`] and [`loader::write_json_atomic`] turn a
//! downloaded text list into a word source.

pub mod loader;

use std::path::PathBuf;
use thiserror::Error;

/// Default location of the word source
pub const DEFAULT_WORDS_PATH: &str = "words.json";

/// Plain-text list downloaded by `fetch` when no URL is given
pub const DEFAULT_WORDS_URL: &str =
    "http://www.instructables.com/files/orig/FLU/YE8L/H82UHPR8/FLUYE8LH82UHPR8.txt";

/// Error loading or writing a word source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot access word source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word source is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}
