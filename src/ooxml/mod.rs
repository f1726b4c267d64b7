//! Office Open XML (OOXML) writer.
//!
//! Two layers:
//!
//! 1. **OPC Layer** (`opc`): package structure (parts, relationships, content
//!    types) and the ZIP container
//! 2. **PresentationML** (`pptx`): slides, text boxes, and the template parts a
//!    new `.pptx` needs
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
