//! Common types and utilities shared across the loader, builder and writer.
//!
//! This module hosts the crate-wide error type, XML escaping, length unit
//! conversion and byte-order-mark handling.

// Submodule declarations
pub mod bom;
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use xml::escape_xml;
