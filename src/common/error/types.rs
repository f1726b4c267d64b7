//! Unified error types for scenario-deck.
use thiserror::Error;

/// Main error type for end-to-end conversions.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The uploaded CSV could not be loaded or failed validation
    #[error(transparent)]
    Load(#[from] crate::sheet::LoadError),

    /// The deck could not be serialized
    #[error("Deck error: {0}")]
    Deck(String),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error should be shown to the uploader as-is.
    ///
    /// Load errors carry the wording meant for end users; everything else is
    /// an operator problem.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Load(_))
    }
}

/// Result type for scenario-deck operations.
pub type Result<T> = std::result::Result<T, Error>;
