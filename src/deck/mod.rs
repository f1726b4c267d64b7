//! Slide deck generation from scenario tables.
//!
//! A [`ScenarioTable`] is turned into a [`MutablePresentation`] using one of
//! three [`LayoutStrategy`] values, then serialized to `.pptx` bytes.
//!
//! | Strategy    | Slides | Detail text       |
//! |-------------|--------|-------------------|
//! | `FreeFlow`  | 1      | as uploaded       |
//! | `Dashboard` | 2      | cleaned           |
//! | `PerRow`    | 1 + N  | cleaned           |
//!
//! # Example
//!
//! ```rust
//! use scenario_deck::deck::{render_deck, DeckOptions, LayoutStrategy};
//! use scenario_deck::sheet::{load_csv, LoaderOptions};
//!
//! let table = load_csv(b"Field,Details\nroles,**Mayor**\n", &LoaderOptions::default())?;
//! let options = DeckOptions::new().with_layout(LayoutStrategy::PerRow);
//! let bytes = render_deck(&table, &options)?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dashboard;
pub mod error;
mod free_flow;
pub mod options;
mod per_row;

pub use dashboard::{Placement, placement};
pub use error::DeckError;
pub use options::{DEFAULT_DECK_TITLE, DeckOptions, LayoutStrategy};

use crate::ooxml::pptx::{MutablePresentation, SlideKind};
use crate::sheet::ScenarioTable;
use tracing::{debug, info};

/// Build the slide model for `table`.
///
/// Never fails: every row is either rendered or, for the dashboard, skipped.
pub fn build_deck(table: &ScenarioTable, options: &DeckOptions) -> MutablePresentation {
    let mut pres = MutablePresentation::new();
    {
        let props = pres.properties_mut();
        props.title = Some(options.title.clone());
        props.creator = options.creator.clone();
        props.created = options.created;
    }

    match options.layout {
        LayoutStrategy::FreeFlow => free_flow::build(&mut pres, table, options),
        LayoutStrategy::Dashboard => dashboard::build(&mut pres, table, options),
        LayoutStrategy::PerRow => per_row::build(&mut pres, table, options),
    }

    debug!(
        layout = %options.layout,
        rows = table.len(),
        slides = pres.slide_count(),
        "built deck"
    );
    pres
}

/// Build the deck for `table` and serialize it to `.pptx` bytes.
pub fn render_deck(table: &ScenarioTable, options: &DeckOptions) -> Result<Vec<u8>, DeckError> {
    let pres = build_deck(table, options);
    let bytes = pres.to_bytes()?;
    info!(
        layout = %options.layout,
        slides = pres.slide_count(),
        bytes = bytes.len(),
        "rendered deck"
    );
    Ok(bytes)
}

/// Opening slide shared by the dashboard and per-row layouts.
fn add_title_slide(pres: &mut MutablePresentation, options: &DeckOptions) {
    let slide = pres.add_slide(SlideKind::Title);
    slide.set_title(&options.title);
    if let Some(ref subtitle) = options.subtitle {
        slide.set_subtitle(subtitle);
    }
}
