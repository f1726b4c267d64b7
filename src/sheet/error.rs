//! Errors raised while loading an uploaded scenario sheet.
//!
//! The `Display` text of every variant is the message shown to the person who
//! uploaded the file; the extra fields are for logs.
use thiserror::Error;

/// Loader error categories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The CSV structure is malformed (bad quoting or delimiters)
    #[error(
        "Error reading file: The CSV file appears to be badly formatted. Please check for missing quotes or incorrect delimiters."
    )]
    Parse {
        /// 1-based line where the problem was detected
        line: usize,
        /// What the parser tripped over
        reason: String,
    },

    /// Any other failure while reading: encoding, I/O, empty input
    #[error("Error reading file: {0}")]
    Generic(String),

    /// Required columns are missing from the header row
    #[error("CSV must contain {} columns.", quote_list(.required))]
    Validation {
        /// Every column the loader requires, in display order
        required: Vec<String>,
        /// The required columns that were not found
        missing: Vec<String>,
    },
}

/// Coarse classification of a [`LoadError`], used for logging and HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Parse,
    Generic,
    Validation,
}

impl LoadError {
    /// The category of this error.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Parse { .. } => LoadErrorKind::Parse,
            LoadError::Generic(_) => LoadErrorKind::Generic,
            LoadError::Validation { .. } => LoadErrorKind::Validation,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Generic(err.to_string())
    }
}

impl From<std::str::Utf8Error> for LoadError {
    fn from(err: std::str::Utf8Error) -> Self {
        LoadError::Generic(format!("input is not valid UTF-8: {}", err))
    }
}

/// Render `["a", "b", "c"]` as `'a', 'b' and 'c'`.
fn quote_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_required_columns() {
        let err = LoadError::Validation {
            required: vec!["Field".to_string(), "Details".to_string()],
            missing: vec!["Details".to_string()],
        };
        assert_eq!(err.to_string(), "CSV must contain 'Field' and 'Details' columns.");
        assert_eq!(err.kind(), LoadErrorKind::Validation);
    }

    #[test]
    fn test_parse_message_is_fixed() {
        let err = LoadError::Parse {
            line: 4,
            reason: "unexpected end of data".to_string(),
        };
        assert!(err.to_string().starts_with("Error reading file: The CSV file appears"));
        assert!(!err.to_string().contains("line 4"));
    }

    #[test]
    fn test_generic_message_carries_raw_text() {
        let err = LoadError::Generic("No columns to parse from file".to_string());
        assert_eq!(err.to_string(), "Error reading file: No columns to parse from file");
    }

    #[test]
    fn test_quote_list() {
        assert_eq!(quote_list(&[]), "");
        assert_eq!(quote_list(&["A".to_string()]), "'A'");
        assert_eq!(
            quote_list(&["A".to_string(), "B".to_string(), "C".to_string()]),
            "'A', 'B' and 'C'"
        );
    }
}
