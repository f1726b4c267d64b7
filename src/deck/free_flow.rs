//! Single-slide layout listing every row.
//!
//! The text box holds exactly one paragraph per row, starting with the first
//! row; there is no leading empty paragraph.
use super::options::DeckOptions;
use crate::common::unit::inches_to_emu;
use crate::ooxml::pptx::{MutablePresentation, Paragraph, SlideKind};
use crate::sheet::ScenarioTable;

/// Text box geometry in inches: (x, y, width, height).
const TEXT_BOX: (f64, f64, f64, f64) = (1.0, 1.5, 8.0, 5.0);

/// Add one "Title and Content" slide with a `Field: Detail` paragraph per
/// row. Detail text is written as-is.
pub(super) fn build(pres: &mut MutablePresentation, table: &ScenarioTable, options: &DeckOptions) {
    let slide = pres.add_slide(SlideKind::Content);
    slide.set_title(&options.title);

    let paragraphs = table
        .rows()
        .iter()
        .map(|row| Paragraph::new(format!("{}: {}", row.field, row.detail)))
        .collect();

    let (x, y, w, h) = TEXT_BOX;
    slide
        .add_paragraph_box(
            paragraphs,
            inches_to_emu(x),
            inches_to_emu(y),
            inches_to_emu(w),
            inches_to_emu(h),
        )
        .font_size(options.body_font_size)
        .word_wrap(true);
}
