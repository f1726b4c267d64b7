//! Loader options.
use super::text::TextConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the label column every scenario sheet must carry.
pub const FIELD_COLUMN: &str = "Field";

/// Which column holds the free text for each field.
///
/// Older scenario exports call it `Details`; newer ones `Summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailColumn {
    #[default]
    Details,
    Summary,
}

impl DetailColumn {
    /// The header name this column is expected under.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailColumn::Details => "Details",
            DetailColumn::Summary => "Summary",
        }
    }
}

impl fmt::Display for DetailColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "details" => Ok(DetailColumn::Details),
            "summary" => Ok(DetailColumn::Summary),
            other => Err(format!(
                "unknown detail column '{}', expected 'Details' or 'Summary'",
                other
            )),
        }
    }
}

/// Options controlling how an uploaded sheet is read and validated.
///
/// # Examples
///
/// ```rust
/// use scenario_deck::sheet::{DetailColumn, LoaderOptions};
///
/// let options = LoaderOptions::new().with_detail_column(DetailColumn::Summary);
/// assert_eq!(options.required_columns(), vec!["Field", "Summary"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Low-level delimited text settings
    pub text: TextConfig,
    /// Column holding the detail text
    pub detail_column: DetailColumn,
}

impl LoaderOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detail column variant.
    #[inline]
    pub fn with_detail_column(mut self, column: DetailColumn) -> Self {
        self.detail_column = column;
        self
    }

    /// The header names that must be present, in display order.
    pub fn required_columns(&self) -> Vec<&'static str> {
        vec![FIELD_COLUMN, self.detail_column.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_column_from_str() {
        assert_eq!("Details".parse::<DetailColumn>(), Ok(DetailColumn::Details));
        assert_eq!(" summary ".parse::<DetailColumn>(), Ok(DetailColumn::Summary));
        assert!("Notes".parse::<DetailColumn>().is_err());
    }

    #[test]
    fn test_loader_options_default() {
        let options = LoaderOptions::default();
        assert_eq!(options.detail_column, DetailColumn::Details);
        assert_eq!(options.text, TextConfig::default());
        assert_eq!(options.required_columns(), vec!["Field", "Details"]);
    }
}
