//! Fixed-position dashboard layout.
//!
//! Each known field has a tile on a 2 x 5 grid. A tile is a bold heading box
//! over a body box holding the cleaned detail text. Rows whose field has no
//! tile are left out.
use super::options::DeckOptions;
use crate::common::unit::inches_to_emu;
use crate::ooxml::pptx::{MutablePresentation, Paragraph, SlideKind};
use crate::sheet::ScenarioTable;
use phf::phf_map;
use tracing::debug;

/// Where a field's tile sits on the dashboard slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Heading shown above the detail text
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Height of the heading box; the body box takes the rest of the tile.
    pub const HEADING_HEIGHT: f64 = 0.35;
}

static PLACEMENTS: phf::Map<&'static str, Placement> = phf_map! {
    "scenario" => Placement { label: "Scenario", x: 0.4, y: 0.4, width: 4.5, height: 1.3 },
    "inciting-incident" => Placement { label: "Inciting Incident", x: 5.1, y: 0.4, width: 4.5, height: 1.3 },
    "training-objectives" => Placement { label: "Training Objectives", x: 0.4, y: 1.8, width: 4.5, height: 1.3 },
    "channels" => Placement { label: "Channels", x: 5.1, y: 1.8, width: 4.5, height: 1.3 },
    "stakeholders" => Placement { label: "Stakeholders", x: 0.4, y: 3.2, width: 4.5, height: 1.3 },
    "roles" => Placement { label: "Roles", x: 5.1, y: 3.2, width: 4.5, height: 1.3 },
    "actions" => Placement { label: "Actions", x: 0.4, y: 4.6, width: 4.5, height: 1.3 },
    "research" => Placement { label: "Research", x: 5.1, y: 4.6, width: 4.5, height: 1.3 },
    "info" => Placement { label: "Info", x: 0.4, y: 6.0, width: 4.5, height: 1.3 },
    "guidance" => Placement { label: "Guidance", x: 5.1, y: 6.0, width: 4.5, height: 1.3 },
};

/// The known dashboard fields, top-left to bottom-right.
pub const KNOWN_FIELDS: [&str; 10] = [
    "scenario",
    "inciting-incident",
    "training-objectives",
    "channels",
    "stakeholders",
    "roles",
    "actions",
    "research",
    "info",
    "guidance",
];

/// Look up the tile for a field. Surrounding whitespace and ASCII case are
/// ignored.
///
/// ```
/// use scenario_deck::deck::dashboard::placement;
/// assert_eq!(placement(" Roles ").map(|p| p.label), Some("Roles"));
/// assert!(placement("weather").is_none());
/// ```
pub fn placement(field: &str) -> Option<&'static Placement> {
    let key = field.trim();
    match PLACEMENTS.get(key) {
        Some(p) => Some(p),
        None => PLACEMENTS.get(key.to_ascii_lowercase().as_str()),
    }
}

pub(super) fn build(pres: &mut MutablePresentation, table: &ScenarioTable, options: &DeckOptions) {
    super::add_title_slide(pres, options);

    let cleaner = options.cleaner();
    let slide = pres.add_slide(SlideKind::Blank);
    let mut placed = 0usize;

    for row in table.rows() {
        let Some(tile) = placement(&row.field) else {
            debug!(field = %row.field, "no dashboard tile for field, skipping row");
            continue;
        };

        slide
            .add_text_box(
                tile.label,
                inches_to_emu(tile.x),
                inches_to_emu(tile.y),
                inches_to_emu(tile.width),
                inches_to_emu(Placement::HEADING_HEIGHT),
            )
            .font_size(options.heading_font_size)
            .bold(true);

        slide
            .add_paragraph_box(
                vec![Paragraph::new(cleaner.clean(&row.detail))],
                inches_to_emu(tile.x),
                inches_to_emu(tile.y + Placement::HEADING_HEIGHT),
                inches_to_emu(tile.width),
                inches_to_emu(tile.height - Placement::HEADING_HEIGHT),
            )
            .font_size(options.tile_font_size)
            .word_wrap(true);
        placed += 1;
    }

    debug!(placed, rows = table.len(), "laid out dashboard");
}
