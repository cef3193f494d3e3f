use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading latency data or drawing charts
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Empty points")]
    EmptyPoints,
    #[error("Malformed value {value:?} at line {line}, column {column}")]
    MalformedField {
        line: usize,
        column: usize,
        value: String,
    },
    #[error("Line {line} has {found} fields, expected at least 7")]
    MissingFields { line: usize, found: usize },
    #[error("Draw chart failed: {0}")]
    Draw(String),
    #[error("Invalid chain name file: {0}")]
    ChainNames(String),
}
