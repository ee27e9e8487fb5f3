// src/error.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the harness
#[derive(Debug, Error)]
pub enum Error {
    /// Harness construction or lifecycle misuse (double loads, missing owner)
    #[error("initialization error: {0}")]
    InitError(String),

    /// Fixture file reads that failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed NEVRA strings or repository descriptors
    #[error("parse error: {0}")]
    ParseError(String),

    /// Lookup for something the harness was never given
    #[error("not found: {0}")]
    NotFoundError(String),

    /// Duplicate repository registration
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Engine-side failures reported through the builder seam
    #[error("resolution error: {0}")]
    ResolutionError(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}
