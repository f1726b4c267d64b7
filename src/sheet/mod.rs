//! Scenario sheet loading.
//!
//! Reads an uploaded CSV into a row-oriented table and checks that the two
//! required columns are present: `Field` and, depending on the export, either
//! `Details` or `Summary`. Failures come back as a [`LoadError`] whose text is
//! ready to show to the uploader.
//!
//! # Example
//!
//! ```rust
//! use scenario_deck::sheet::{load_csv, LoaderOptions, LoadErrorKind};
//!
//! let err = load_csv(b"Field,Notes\nscenario,Flood\n", &LoaderOptions::default()).unwrap_err();
//! assert_eq!(err.kind(), LoadErrorKind::Validation);
//! assert_eq!(err.to_string(), "CSV must contain 'Field' and 'Details' columns.");
//! ```

pub mod error;
pub mod options;
pub mod table;
pub mod text;

pub use error::{LoadError, LoadErrorKind};
pub use options::{DetailColumn, FIELD_COLUMN, LoaderOptions};
pub use table::{RawTable, ScenarioRow, ScenarioTable, load_csv, read_table};
