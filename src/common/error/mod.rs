//! Unified error type for scenario-deck.
//!
//! Each layer keeps its own error enum (`LoadError`, `DeckError`,
//! `ConfigError`); this module folds them into one type for callers that
//! drive the whole pipeline, such as the command-line binary.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
