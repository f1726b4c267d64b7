//! Application configuration.
//!
//! Settings come from an optional YAML file; command-line flags override
//! individual values afterwards.
//!
//! ```yaml
//! server:
//!   bind: "0.0.0.0:8501"
//! deck:
//!   layout: dashboard
//!   title: "Flood exercise"
//!   detail_column: summary
//!   artifacts: ["_x000D_"]
//!   creator: "Exercise control"
//!   created: "2024-03-01T09:00:00Z"
//! ```
use crate::deck::{DEFAULT_DECK_TITLE, DeckOptions, LayoutStrategy};
use crate::sheet::{DetailColumn, LoaderOptions};
use crate::text::ARTIFACT_CARRIAGE_RETURN;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Address the server listens on when none is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub deck: DeckConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    pub layout: LayoutStrategy,
    pub title: String,
    pub subtitle: Option<String>,
    pub detail_column: DetailColumn,
    /// Substrings stripped from detail text
    pub artifacts: Vec<String>,
    /// Author written to the document properties
    pub creator: Option<String>,
    /// Fixed creation time; left out of the package when unset
    pub created: Option<DateTime<Utc>>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            layout: LayoutStrategy::default(),
            title: DEFAULT_DECK_TITLE.to_string(),
            subtitle: None,
            detail_column: DetailColumn::default(),
            artifacts: vec![ARTIFACT_CARRIAGE_RETURN.to_string()],
            creator: None,
            created: None,
        }
    }
}

impl AppConfig {
    /// Read and parse a YAML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parse YAML config text. Missing keys take their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Deck options described by this config.
    pub fn deck_options(&self) -> DeckOptions {
        let mut options = DeckOptions::new()
            .with_layout(self.deck.layout)
            .with_title(self.deck.title.clone())
            .with_artifacts(self.deck.artifacts.iter().cloned());
        options.subtitle = self.deck.subtitle.clone();
        options.creator = self.deck.creator.clone();
        options.created = self.deck.created;
        options
    }

    /// Loader options described by this config.
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions::new().with_detail_column(self.deck.detail_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_yaml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert_eq!(config.deck_options(), DeckOptions::default());
    }

    #[test]
    fn test_partial_config() {
        let yaml = "deck:\n  layout: per-row\n  detail_column: summary\n";
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.deck.layout, LayoutStrategy::PerRow);
        assert_eq!(config.deck.title, DEFAULT_DECK_TITLE);
        assert_eq!(config.loader_options().detail_column, DetailColumn::Summary);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = AppConfig::from_yaml_str("deck:\n  colour: red\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        assert!(AppConfig::from_yaml_str("deck:\n  layout: grid\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.yaml");
        std::fs::write(
            &path,
            "server:\n  bind: \"0.0.0.0:9000\"\ndeck:\n  title: Flood\n  artifacts: []\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        let options = config.deck_options();
        assert_eq!(options.title, "Flood");
        assert!(options.artifacts.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::from_file("/nonexistent/scenario-deck.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_document_properties() {
        let yaml = "deck:\n  creator: Exercise control\n  created: \"2024-03-01T09:00:00Z\"\n";
        let options = AppConfig::from_yaml_str(yaml).unwrap().deck_options();
        assert_eq!(options.creator.as_deref(), Some("Exercise control"));
        assert_eq!(
            options.created,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_invalid_created_is_rejected() {
        let err = AppConfig::from_yaml_str("deck:\n  created: yesterday\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = AppConfig::default();
        config.deck.layout = LayoutStrategy::Dashboard;
        config.deck.created = Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
        let yaml = config.to_yaml().unwrap();
        assert_eq!(AppConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
