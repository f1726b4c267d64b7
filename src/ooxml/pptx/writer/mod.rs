//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;

// Re-export main types
pub use pres::{DocumentProperties, MutablePresentation};
pub use shape::{MutableShape, Paragraph};
pub use slide::{MutableSlide, SlideKind};
