//! Parsing configuration for delimited text input.

/// Configuration for parsing delimited text.
///
/// The defaults describe the CSV files produced by common spreadsheet
/// exports: comma separated, double-quote quoting, blank lines ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    /// Field delimiter character
    pub delimiter: u8,
    /// Quote character for quoted fields
    pub quote: u8,
    /// Whether lines with no content are dropped instead of producing rows
    pub skip_blank_lines: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            skip_blank_lines: true,
        }
    }
}
