use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deck generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Presentation writing or package error
    #[error("OOXML error: {0}")]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Written file did not match the built deck
    #[error("Verification failed for {path}: expected {expected} slides, found {found}")]
    Verification {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// Result type for deck generation.
pub type Result<T> = std::result::Result<T, Error>;
