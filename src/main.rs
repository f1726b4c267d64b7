//! scenario-deck command-line interface.
//!
//! `build` converts one CSV file into a deck; `serve` runs the upload page.

use clap::{Parser, Subcommand};
use scenario_deck::common::Result;
use scenario_deck::config::AppConfig;
use scenario_deck::convert_csv;
use scenario_deck::deck::LayoutStrategy;
use scenario_deck::sheet::{DetailColumn, LoadError};
use scenario_deck::web::{self, AppState};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "scenario-deck")]
#[command(about = "Turn crisis-scenario CSV sheets into PowerPoint decks")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true, env = "SCENARIO_DECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a CSV file into a .pptx deck
    Build {
        /// Scenario sheet to convert
        input: PathBuf,

        /// Where to write the deck
        #[arg(short, long, default_value = web::DOWNLOAD_FILENAME)]
        output: PathBuf,

        /// Layout strategy: free-flow, dashboard or per-row
        #[arg(long)]
        layout: Option<LayoutStrategy>,

        /// Column holding the detail text: Details or Summary
        #[arg(long)]
        detail_column: Option<DetailColumn>,

        /// Deck title
        #[arg(long)]
        title: Option<String>,

        /// Author recorded in the document properties
        #[arg(long)]
        creator: Option<String>,
    },

    /// Serve the upload page
    Serve {
        /// Address to listen on
        #[arg(long, env = "SCENARIO_DECK_BIND")]
        bind: Option<String>,
    },
}

impl Cli {
    /// Load the config file, if any, and fold command-line overrides into it.
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!(config_file = ?path, "Loading configuration");
                AppConfig::from_file(path)?
            },
            None => AppConfig::default(),
        };

        match &self.command {
            Command::Build {
                layout,
                detail_column,
                title,
                creator,
                ..
            } => {
                if let Some(layout) = layout {
                    config.deck.layout = *layout;
                }
                if let Some(column) = detail_column {
                    config.deck.detail_column = *column;
                }
                if let Some(title) = title {
                    config.deck.title = title.clone();
                }
                if let Some(creator) = creator {
                    config.deck.creator = Some(creator.clone());
                }
            },
            Command::Serve { bind } => {
                if let Some(bind) = bind {
                    config.server.bind = bind.clone();
                }
            },
        }
        Ok(config)
    }
}

/// Convert `input` to a deck at `output`, returning the deck size in bytes.
fn build(config: &AppConfig, input: &Path, output: &Path) -> Result<usize> {
    // An unreadable input is reported like any other unreadable upload
    let data = std::fs::read(input).map_err(LoadError::from)?;
    let bytes = convert_csv(&data, &config.loader_options(), &config.deck_options())?;
    std::fs::write(output, &bytes)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        layout = %config.deck.layout,
        bytes = bytes.len(),
        "Deck written"
    );
    Ok(bytes.len())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    match &cli.command {
        Command::Build { input, output, .. } => {
            build(&config, input, output)?;
        },
        Command::Serve { .. } => {
            let listener = TcpListener::bind(&config.server.bind).await?;
            web::serve(listener, AppState::from_config(&config)).await?;
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_user_facing() => {
            eprintln!("{err}");
            ExitCode::FAILURE
        },
        Err(err) => {
            error!(%err, "scenario-deck failed");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenario_deck::common::Error;

    #[test]
    fn test_build_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("deck.yaml");
        std::fs::write(&config_path, "deck:\n  layout: dashboard\n  title: From file\n").unwrap();

        let cli = Cli::try_parse_from([
            "scenario-deck",
            "build",
            "scenario.csv",
            "--layout",
            "per-row",
            "--detail-column",
            "summary",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.deck.layout, LayoutStrategy::PerRow);
        assert_eq!(config.deck.detail_column, DetailColumn::Summary);
        assert_eq!(config.deck.title, "From file");
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["scenario-deck", "build", "scenario.csv"]).unwrap();
        match &cli.command {
            Command::Build { output, layout, .. } => {
                assert_eq!(output, Path::new("scenario_overview.pptx"));
                assert!(layout.is_none());
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_layout_flag_is_rejected() {
        assert!(Cli::try_parse_from(["scenario-deck", "build", "a.csv", "--layout", "grid"]).is_err());
    }

    #[test]
    fn test_serve_bind_override() {
        let cli = Cli::try_parse_from(["scenario-deck", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap().server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_build_writes_deck() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scenario.csv");
        let output = dir.path().join("out.pptx");
        std::fs::write(&input, "Field,Details\nscenario,River flood\n").unwrap();

        let size = build(&AppConfig::default(), &input, &output).unwrap();
        assert_eq!(std::fs::metadata(&output).unwrap().len() as usize, size);
    }

    #[test]
    fn test_creator_reaches_document_properties() {
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scenario.csv");
        let output = dir.path().join("out.pptx");
        std::fs::write(&input, "Field,Details\nscenario,River flood\n").unwrap();

        let cli = Cli::try_parse_from([
            "scenario-deck",
            "build",
            input.to_str().unwrap(),
            "--creator",
            "Exercise control",
        ])
        .unwrap();
        build(&cli.resolve_config().unwrap(), &input, &output).unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&output).unwrap()).unwrap();
        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("<dc:creator>Exercise control</dc:creator>"));
        assert!(!core.contains("dcterms:created"));
    }

    #[test]
    fn test_build_missing_input_is_user_facing() {
        let dir = tempfile::tempdir().unwrap();
        let err = build(
            &AppConfig::default(),
            &dir.path().join("absent.csv"),
            &dir.path().join("out.pptx"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Load(LoadError::Generic(_))));
        assert!(err.is_user_facing());
        assert!(err.to_string().starts_with("Error reading file: "));
        assert!(!dir.path().join("out.pptx").exists());
    }

    #[test]
    fn test_build_reports_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scenario.csv");
        std::fs::write(&input, "Field,Notes\na,b\n").unwrap();

        let err = build(&AppConfig::default(), &input, &dir.path().join("out.pptx")).unwrap_err();
        assert!(matches!(err, Error::Load(_)));
        assert_eq!(err.to_string(), "CSV must contain 'Field' and 'Details' columns.");
    }
}
