// src/error.rs
// =============================================================================
// Error types for every step of the download pipeline.
//
// Every variant is fatal: the run stops at the first error and main.rs
// prints it to stderr. Skipped files are not errors and never show up here.
// =============================================================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The commit payload is not valid JSON or not an array of commits
    #[error("error in decoding commit payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Downloading or decoding a file from GitHub failed
    #[error("error in fetching {path}@{revision}: {reason}")]
    Fetch {
        path: String,
        revision: String,
        reason: String,
    },

    /// Writing a downloaded file to the output folder failed
    #[error("error in writing file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required option is missing or an option value is invalid
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The log subscriber or the log file could not be set up
    #[error("error in setting up logging: {0}")]
    Logging(String),

    /// Markdown documentation could not be generated
    #[error("error in generating docs at {}: {source}", path.display())]
    Docs {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn fetch(path: &str, revision: &str, reason: impl Into<String>) -> Self {
        Error::Fetch {
            path: path.to_string(),
            revision: revision.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
