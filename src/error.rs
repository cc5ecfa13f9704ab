use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Corpus Unavailable: could not read '{path}': {source}")]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty Corpus: no usable {ngram_len}-letter records")]
    EmptyCorpus { ngram_len: usize },

    #[error("No Restarts Configured: restart count must be at least 1")]
    NoRestartsConfigured,

    #[error("Invalid N-gram Length: {0} (supported: 1..=5)")]
    InvalidNgramLength(usize),

    #[error("Invalid Key: {0}")]
    InvalidKey(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type SolverResult<T> = Result<T, SolverError>;
