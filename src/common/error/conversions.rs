//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from layer
//! error types to the unified Error type.

use super::types::Error;

impl From<crate::deck::DeckError> for Error {
    fn from(err: crate::deck::DeckError) -> Self {
        match err {
            crate::deck::DeckError::Ooxml(crate::ooxml::error::OoxmlError::Io(e)) => Error::Io(e),
            other => Error::Deck(other.to_string()),
        }
    }
}

impl From<crate::ooxml::error::OoxmlError> for Error {
    fn from(err: crate::ooxml::error::OoxmlError) -> Self {
        match err {
            crate::ooxml::error::OoxmlError::Io(e) => Error::Io(e),
            other => Error::Deck(other.to_string()),
        }
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        match err {
            crate::config::ConfigError::Io(e) => Error::Io(e),
            other => Error::Config(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::LoadError;

    #[test]
    fn test_load_error_is_user_facing() {
        let err: Error = LoadError::Generic("boom".to_string()).into();
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "Error reading file: boom");
    }

    #[test]
    fn test_ooxml_io_error_maps_to_io() {
        let io = std::io::Error::other("disk full");
        let err: Error = crate::ooxml::error::OoxmlError::Io(io).into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_config_parse_error_maps_to_config() {
        let err: Error = crate::config::ConfigError::Parse("bad yaml".to_string()).into();
        assert!(matches!(err, Error::Config(_)));
    }
}
