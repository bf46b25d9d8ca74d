//! Word list download command
//!
//! Downloads a plain-text word list over HTTP and stores it as the JSON word
//! source. Nothing is written unless the server answers 200.

use crate::wordlists::LoadError;
use crate::wordlists::loader::{parse_text_list, write_json_atomic};
use log::{info, warn};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error downloading or storing a word list
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a status other than 200
    #[error("word source not reachable: HTTP {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Transport(Box<ureq::Error>),

    #[error("cannot read response body: {0}")]
    Body(#[source] io::Error),

    #[error(transparent)]
    Store(#[from] LoadError),
}

/// Download the word list at `url` and write the word source to `output`
///
/// Returns the number of words written.
///
/// # Errors
///
/// - `FetchError::Status` if the server does not answer 200
/// - `FetchError::Transport` / `FetchError::Body` on network failures
/// - `FetchError::Store` if the word source cannot be written
///
/// `output` is left untouched on any error.
pub fn fetch_word_list(url: &str, output: &Path) -> Result<usize, FetchError> {
    info!("fetching word list from {url}");

    let (status, body) = match ureq::get(url).call() {
        Ok(response) => {
            let status = response.status();
            (status, response.into_string().map_err(FetchError::Body)?)
        }
        Err(ureq::Error::Status(status, response)) => {
            (status, response.into_string().unwrap_or_default())
        }
        Err(e) => return Err(FetchError::Transport(Box::new(e))),
    };

    store_response(status, &body, output)
}

/// Store a downloaded word list, if the response status is 200
///
/// # Errors
///
/// `FetchError::Status` for any other status; `FetchError::Store` if the
/// word source cannot be written.
pub fn store_response(status: u16, body: &str, output: &Path) -> Result<usize, FetchError> {
    if status != 200 {
        warn!("word source answered HTTP {status}");
        return Err(FetchError::Status { status });
    }

    let words = parse_text_list(body);
    info!("loaded {} words", words.len());
    write_json_atomic(output, &words)?;
    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::load_json;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_assist_fetch_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn ok_response_is_stored() {
        let dir = scratch_dir("ok");
        let output = dir.join("words.json");

        let count = store_response(200, "crane slate\ncrate\n", &output).unwrap();

        assert_eq!(count, 3);
        assert_eq!(load_json(&output).unwrap()[2].text(), "crate");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn error_status_leaves_existing_source_untouched() {
        let dir = scratch_dir("status");
        let output = dir.join("words.json");
        fs::write(&output, "[\"kept\"]\n").unwrap();

        let err = store_response(404, "crane slate", &output).unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404 }));
        assert!(err.to_string().contains("404"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "[\"kept\"]\n");
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn other_success_codes_are_rejected() {
        let dir = scratch_dir("no_content");
        let output = dir.join("words.json");

        assert!(matches!(
            store_response(204, "", &output),
            Err(FetchError::Status { status: 204 })
        ));
        assert!(!output.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unreachable_host_writes_nothing() {
        let dir = scratch_dir("unreachable");
        let output = dir.join("words.json");

        // Port 9 on localhost: nothing listens, the connection is refused
        assert!(fetch_word_list("http://127.0.0.1:9/words.txt", &output).is_err());
        assert!(!output.exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
