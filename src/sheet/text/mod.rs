//! Delimited text (CSV, TSV) parsing.
//!
//! This is the low-level half of the loader: it turns bytes into records and
//! reports structural problems (unbalanced quotes, stray characters after a
//! closing quote) with line numbers. Header handling and column validation
//! live one level up in [`crate::sheet`].
//!
//! # Example
//!
//! ```rust
//! use scenario_deck::sheet::text::{TextConfig, TextParser};
//!
//! let mut parser = TextParser::new(b"Field,Details\nscenario,Flood\n", TextConfig::default());
//! let header = parser.parse_row().unwrap().unwrap();
//! assert_eq!(header.fields, vec!["Field", "Details"]);
//! ```

pub mod config;
pub mod parser;

pub use config::TextConfig;
pub use parser::{ParseFailure, Record, TextParser};
