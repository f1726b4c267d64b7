//! scenario-deck - turn crisis-scenario CSV sheets into PowerPoint decks
//!
//! An uploaded sheet lists one scenario aspect per row under a `Field`
//! column, with its text under `Details` (or `Summary` in newer exports).
//! The crate validates the sheet, lays the rows out on slides with one of
//! three strategies and writes a `.pptx` package.
//!
//! # Features
//!
//! - **Loader**: quote-aware CSV parsing with user-facing error wording
//! - **Layouts**: a single free-flow slide, a fixed-grid dashboard, or one
//!   slide per row
//! - **Writer**: a self-contained PresentationML package with deterministic
//!   bytes for identical input
//! - **Server** (feature `server`): upload, preview and download over HTTP
//!
//! # Example
//!
//! ```rust
//! use scenario_deck::convert_csv;
//! use scenario_deck::deck::{DeckOptions, LayoutStrategy};
//! use scenario_deck::sheet::LoaderOptions;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let csv = b"Field,Details\nscenario,River flood\nroles,**Mayor** and council\n";
//! let options = DeckOptions::new().with_layout(LayoutStrategy::Dashboard);
//! let bytes = convert_csv(csv, &LoaderOptions::default(), &options)?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```

/// Shared error type, XML escaping and unit helpers
pub mod common;

/// Optional YAML configuration
pub mod config;

/// Row-to-slide layout strategies
pub mod deck;

/// OOXML (Office Open XML) package writer
///
/// Only the PresentationML parts the decks need are produced.
pub mod ooxml;

/// CSV loading and validation
pub mod sheet;

/// Detail text cleanup
pub mod text;

/// HTTP upload/preview/download surface
#[cfg(feature = "server")]
pub mod web;

use crate::deck::{DeckOptions, render_deck};
use crate::sheet::{LoaderOptions, load_csv};

/// Load `data` as a scenario sheet and render it to `.pptx` bytes.
pub fn convert_csv(
    data: &[u8],
    loader: &LoaderOptions,
    options: &DeckOptions,
) -> common::Result<Vec<u8>> {
    let table = load_csv(data, loader)?;
    Ok(render_deck(&table, options)?)
}
