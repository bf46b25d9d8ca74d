//! Word source loading and writing
//!
//! The word source is a UTF-8 JSON array of strings. It is produced from a
//! plain-text word list (one or more words per line) and written atomically.

use super::LoadError;
use crate::core::Word;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Load a JSON word source from a file
///
/// Entries that are not plain ASCII letters are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Json`
/// if it is not a JSON array of strings.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_json;
///
/// let words = load_json("words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_json(&content)?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a JSON array of strings into words
///
/// # Errors
///
/// Returns `LoadError::Json` if `content` is not a JSON array of strings.
pub fn parse_json(content: &str) -> Result<Vec<Word>, LoadError> {
    let raw: Vec<String> = serde_json::from_str(content)?;
    Ok(words_from_strings(raw))
}

/// Convert raw strings to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_strings;
///
/// let words = words_from_strings(["crane", "Slate", "can't", ""]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
pub fn words_from_strings<I, S>(raw: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut skipped = 0usize;
    let words: Vec<Word> = raw
        .into_iter()
        .filter_map(|s| {
            Word::new(s)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();
    if skipped > 0 {
        debug!("skipped {skipped} entries that are not plain ASCII words");
    }
    words
}

/// Split a downloaded plain-text word list on whitespace
#[must_use]
pub fn parse_text_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Write `words` as a JSON array to `path`, replacing it atomically
///
/// The array goes to a temporary file next to `path` which is then renamed
/// over it, so readers never see a partial word source. The temporary file
/// is removed if anything fails.
///
/// # Errors
///
/// Returns `LoadError::Io` if the temporary file cannot be written or
/// renamed.
pub fn write_json_atomic<P: AsRef<Path>>(path: P, words: &[String]) -> Result<(), LoadError> {
    let path = path.as_ref();
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp_path = path.with_file_name(tmp_name);

    let result = write_then_rename(&tmp_path, path, words);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote {} words to {}", words.len(), path.display());
    Ok(())
}

fn write_then_rename(tmp_path: &Path, path: &Path, words: &[String]) -> io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    serde_json::to_writer(&mut file, words)?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}
