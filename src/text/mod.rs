//! Text post-processing applied to detail text before it is placed on a slide.
//!
//! Scenario sheets come out of spreadsheet tools with `_x000D_` carriage-return
//! escapes left in the cell text, and authors mark emphasis with `**text**`.
//! Slides render emphasis as uppercase instead of styled bold.

pub mod cleanup;

pub use cleanup::{ARTIFACT_CARRIAGE_RETURN, TextCleaner, clean_text, emphasize_bold_markers};
