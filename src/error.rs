//! Error types for the engine

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({row}, {col}) is out of bounds (must be 0-7)")]
    OutOfBounds { row: usize, col: usize },

    #[error("cannot parse move '{input}' (expected \"row col\")")]
    ParseMove { input: String },

    #[error("invalid board text: {message}")]
    ParseBoard { message: String },

    #[error("invalid color '{input}' (expected 'black' or 'white')")]
    ParseColor { input: String },

    #[error("invalid difficulty '{input}' (expected easy, medium or hard)")]
    ParseDifficulty { input: String },

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
