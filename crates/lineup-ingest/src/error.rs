#![deny(unsafe_code)]

use std::path::PathBuf;

/// Fatal problems loading a roster; the table is rejected as a whole.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("roster {origin} is missing required column {column}")]
    MissingColumn { origin: String, column: &'static str },

    #[error("roster {origin} line {line}: invalid {column} value {value:?}: {message}")]
    InvalidValue {
        origin: String,
        line: u64,
        column: &'static str,
        value: String,
        message: String,
    },

    #[error("roster {origin} line {line}: duplicate player {name}")]
    DuplicatePlayer {
        origin: String,
        line: u64,
        name: String,
    },

    #[error("roster {origin} contains no players")]
    EmptyRoster { origin: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
