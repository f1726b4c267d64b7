//! PowerPoint (.pptx) presentation writer.
//!
//! Builds a presentation in memory and serializes it to an Office Open XML
//! package:
//!
//! - `MutablePresentation`: the deck, its slide size, and document properties
//! - `MutableSlide`: one slide based on a [`SlideKind`] layout
//! - `MutableShape`: a positioned text box made of paragraphs and runs
//!
//! # Example
//!
//! ```rust
//! use scenario_deck::ooxml::pptx::{MutablePresentation, Paragraph, SlideKind};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideKind::Content);
//! slide.set_title("Crisis Scenario Overview");
//! slide
//!     .add_paragraph_box(vec![Paragraph::new("scenario: Flood")], 914400, 1371600, 7315200, 4572000)
//!     .font_size(14.0)
//!     .word_wrap(true);
//!
//! let bytes = pres.to_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), scenario_deck::ooxml::error::OoxmlError>(())
//! ```

pub mod format;
pub(crate) mod package;
pub mod template;
pub mod writer;

pub use format::TextFormat;
pub use writer::{
    DocumentProperties, MutablePresentation, MutableShape, MutableSlide, Paragraph, SlideKind,
};

/// MIME type of a `.pptx` file.
pub use crate::ooxml::opc::constants::content_type::PML_PRESENTATION as PPTX_MIME_TYPE;
