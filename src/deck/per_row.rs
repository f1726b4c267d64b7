//! One slide per row, after a title slide.
use super::options::DeckOptions;
use crate::common::unit::inches_to_emu;
use crate::ooxml::pptx::{MutablePresentation, Paragraph, SlideKind};
use crate::sheet::ScenarioTable;

pub(super) fn build(pres: &mut MutablePresentation, table: &ScenarioTable, options: &DeckOptions) {
    super::add_title_slide(pres, options);

    let cleaner = options.cleaner();
    for row in table.rows() {
        let slide = pres.add_slide(SlideKind::Content);
        slide.set_title(&row.field);
        slide
            .add_paragraph_box(
                vec![Paragraph::new(cleaner.clean(&row.detail))],
                inches_to_emu(1.0),
                inches_to_emu(1.5),
                inches_to_emu(8.0),
                inches_to_emu(5.0),
            )
            .font_size(options.body_font_size)
            .word_wrap(true);
    }
}
