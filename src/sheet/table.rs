//! Row-oriented tables built from parsed CSV records.
use super::error::LoadError;
use super::options::{FIELD_COLUMN, DetailColumn, LoaderOptions};
use super::text::{TextConfig, TextParser};
use crate::common::bom::{BomKind, detect_bom, strip_utf8_bom};
use tracing::debug;

/// A parsed CSV with its header row, before any column checks.
///
/// Used for the upload preview, which shows the data even when validation
/// fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, each padded to the header width.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with exactly this header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Check the required columns and project rows to field/detail pairs.
    pub fn validate(&self, options: &LoaderOptions) -> Result<ScenarioTable, LoadError> {
        let required = options.required_columns();
        let missing: Vec<String> = required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        let (Some(field_idx), Some(detail_idx)) = (
            self.column_index(FIELD_COLUMN),
            self.column_index(options.detail_column.as_str()),
        ) else {
            return Err(LoadError::Validation {
                required: required.iter().map(|s| s.to_string()).collect(),
                missing,
            });
        };

        let rows = self
            .rows
            .iter()
            .map(|row| ScenarioRow::new(row[field_idx].clone(), row[detail_idx].clone()))
            .collect();

        Ok(ScenarioTable {
            detail_column: options.detail_column,
            rows,
        })
    }
}

/// One field/detail pair from a scenario sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRow {
    /// Short label, e.g. "scenario" or "roles"
    pub field: String,
    /// Free text; may contain export artifacts and `**bold**` markers
    pub detail: String,
}

impl ScenarioRow {
    pub fn new(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

/// A validated scenario sheet, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioTable {
    detail_column: DetailColumn,
    rows: Vec<ScenarioRow>,
}

impl ScenarioTable {
    /// Build a table directly from rows.
    pub fn from_rows(detail_column: DetailColumn, rows: Vec<ScenarioRow>) -> Self {
        Self {
            detail_column,
            rows,
        }
    }

    /// Which detail column the rows were read from.
    pub fn detail_column(&self) -> DetailColumn {
        self.detail_column
    }

    /// The rows in file order.
    pub fn rows(&self) -> &[ScenarioRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse CSV bytes into a [`RawTable`] without checking columns.
///
/// The first non-blank record is the header. Data rows longer than the header
/// are a parse error; shorter rows are padded with empty values.
pub fn read_table(data: &[u8], config: &TextConfig) -> Result<RawTable, LoadError> {
    if let Some(BomKind::Utf16Le | BomKind::Utf16Be) = detect_bom(data) {
        return Err(LoadError::Generic(
            "file is UTF-16 encoded; save it as UTF-8 CSV".to_string(),
        ));
    }
    let data = strip_utf8_bom(data);
    std::str::from_utf8(data)?;

    let mut parser = TextParser::new(data, config.clone());
    let to_load_error = |f: super::text::ParseFailure| LoadError::Parse {
        line: f.line,
        reason: f.reason,
    };

    let headers = match parser.parse_row().map_err(to_load_error)? {
        Some(record) => record.fields,
        None => return Err(LoadError::Generic("No columns to parse from file".to_string())),
    };

    let width = headers.len();
    let mut rows = Vec::new();
    while let Some(mut record) = parser.parse_row().map_err(to_load_error)? {
        if record.fields.len() > width {
            return Err(LoadError::Parse {
                line: record.line,
                reason: format!(
                    "Expected {} fields in line {}, saw {}",
                    width,
                    record.line,
                    record.fields.len()
                ),
            });
        }
        record.fields.resize(width, String::new());
        rows.push(record.fields);
    }

    debug!(columns = width, rows = rows.len(), "parsed CSV table");
    Ok(RawTable { headers, rows })
}

/// Load and validate an uploaded scenario sheet.
///
/// # Examples
///
/// ```rust
/// use scenario_deck::sheet::{load_csv, LoaderOptions};
///
/// let csv = b"Field,Details\nscenario,River flood\nroles,**Mayor** and council\n";
/// let table = load_csv(csv, &LoaderOptions::default())?;
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows()[0].field, "scenario");
/// # Ok::<(), scenario_deck::sheet::LoadError>(())
/// ```
pub fn load_csv(data: &[u8], options: &LoaderOptions) -> Result<ScenarioTable, LoadError> {
    let raw = read_table(data, &options.text)?;
    let table = raw.validate(options)?;
    debug!(
        rows = table.len(),
        detail_column = %options.detail_column,
        "validated scenario sheet"
    );
    Ok(table)
}
