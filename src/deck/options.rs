//! Deck generation options.
use crate::text::{ARTIFACT_CARRIAGE_RETURN, TextCleaner};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title used when none is configured.
pub const DEFAULT_DECK_TITLE: &str = "Crisis Scenario Overview";

/// How rows are turned into slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    /// One slide listing every row as `Field: Detail`
    #[default]
    FreeFlow,
    /// A title slide plus one slide of fixed-position tiles
    Dashboard,
    /// A title slide plus one slide per row
    PerRow,
}

impl LayoutStrategy {
    /// All strategies, in display order.
    pub const ALL: [LayoutStrategy; 3] = [
        LayoutStrategy::FreeFlow,
        LayoutStrategy::Dashboard,
        LayoutStrategy::PerRow,
    ];

    /// Name used on the command line, in config files and in forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutStrategy::FreeFlow => "free-flow",
            LayoutStrategy::Dashboard => "dashboard",
            LayoutStrategy::PerRow => "per-row",
        }
    }

    /// Number of slides this strategy produces for `rows` rows.
    ///
    /// ```
    /// use scenario_deck::deck::LayoutStrategy;
    /// assert_eq!(LayoutStrategy::FreeFlow.expected_slide_count(7), 1);
    /// assert_eq!(LayoutStrategy::Dashboard.expected_slide_count(7), 2);
    /// assert_eq!(LayoutStrategy::PerRow.expected_slide_count(7), 8);
    /// ```
    pub fn expected_slide_count(&self, rows: usize) -> usize {
        match self {
            LayoutStrategy::FreeFlow => 1,
            LayoutStrategy::Dashboard => 2,
            LayoutStrategy::PerRow => 1 + rows,
        }
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "free-flow" | "freeflow" | "single" => Ok(LayoutStrategy::FreeFlow),
            "dashboard" => Ok(LayoutStrategy::Dashboard),
            "per-row" | "perrow" => Ok(LayoutStrategy::PerRow),
            _ => Err(format!(
                "unknown layout '{}', expected one of: free-flow, dashboard, per-row",
                s.trim()
            )),
        }
    }
}

/// Options controlling deck generation.
///
/// # Examples
///
/// ```rust
/// use scenario_deck::deck::{DeckOptions, LayoutStrategy};
///
/// let options = DeckOptions::new()
///     .with_layout(LayoutStrategy::PerRow)
///     .with_title("Flood exercise");
/// assert_eq!(options.title, "Flood exercise");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeckOptions {
    /// Row-to-slide strategy
    pub layout: LayoutStrategy,
    /// Deck title, shown on the first slide
    pub title: String,
    /// Subtitle for the title slide of the dashboard and per-row layouts
    pub subtitle: Option<String>,
    /// Literal substrings removed from detail text before rendering
    pub artifacts: Vec<String>,
    /// Paragraph size in points for free-flow and per-row text
    pub body_font_size: f64,
    /// Heading size in points for dashboard tiles
    pub heading_font_size: f64,
    /// Body size in points for dashboard tiles
    pub tile_font_size: f64,
    /// Author recorded in the document properties
    pub creator: Option<String>,
    /// Creation time recorded in the document properties
    pub created: Option<DateTime<Utc>>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            layout: LayoutStrategy::default(),
            title: DEFAULT_DECK_TITLE.to_string(),
            subtitle: None,
            artifacts: vec![ARTIFACT_CARRIAGE_RETURN.to_string()],
            body_font_size: 14.0,
            heading_font_size: 12.0,
            tile_font_size: 10.0,
            creator: None,
            created: None,
        }
    }
}

impl DeckOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_layout(mut self, layout: LayoutStrategy) -> Self {
        self.layout = layout;
        self
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Replace the artifact list. An empty list disables stripping.
    #[inline]
    pub fn with_artifacts<I, S>(mut self, artifacts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artifacts = artifacts.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn with_body_font_size(mut self, size: f64) -> Self {
        self.body_font_size = size;
        self
    }

    #[inline]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    #[inline]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// The text cleaner for the configured artifact list.
    pub fn cleaner(&self) -> TextCleaner {
        if self.artifacts.len() == 1 && self.artifacts[0] == ARTIFACT_CARRIAGE_RETURN {
            TextCleaner::default()
        } else {
            TextCleaner::new(&self.artifacts)
        }
    }
}
