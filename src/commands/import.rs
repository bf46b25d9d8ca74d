//! Word list import command
//!
//! Turns a plain-text word list (as downloaded from a word-list site) into
//! the JSON word source the solver loads.

use crate::wordlists::LoadError;
use crate::wordlists::loader::{parse_text_list, write_json_atomic};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read a text word list from `input` (`-` for stdin) and write the word
/// source to `output`
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns `LoadError::Io` if the input cannot be read or the output cannot
/// be written. The output is left untouched on failure.
pub fn import_word_list(input: &str, output: &Path) -> Result<usize, LoadError> {
    let text = if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| LoadError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        text
    } else {
        std::fs::read_to_string(input).map_err(|source| LoadError::Io {
            path: PathBuf::from(input),
            source,
        })?
    };

    let words = parse_text_list(&text);
    write_json_atomic(output, &words)?;
    Ok(words.len())
}
