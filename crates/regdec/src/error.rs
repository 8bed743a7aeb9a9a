use thiserror::Error;

/// Front-end errors (reading inputs, rendering output).
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No input values given")]
    NoInput,
}

pub type Result<T> = std::result::Result<T, Error>;
