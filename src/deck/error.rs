//! Errors raised while rendering a deck.
use crate::ooxml::error::OoxmlError;
use thiserror::Error;

/// Deck rendering error.
///
/// Building the slide model never fails; only serialization can.
#[derive(Error, Debug)]
pub enum DeckError {
    /// The presentation package could not be written
    #[error("failed to serialize deck: {0}")]
    Ooxml(#[from] OoxmlError),
}
