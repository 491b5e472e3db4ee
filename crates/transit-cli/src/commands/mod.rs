// Handlers for each CLI subcommand. main.rs parses arguments, loads the
// dataset once and dispatches here.

pub mod amenities;
pub mod analytics;
pub mod ask;
pub mod catalogue;
pub mod connections;
pub mod line;
pub mod route;
pub mod station;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use transit_lib::{load_network, resolve_dataset, Error as LibError, NetworkGraph};
use transit_cli::output::{format_unknown_station_message, OutputFormat};
use transit_cli::terminal::ColorPalette;

/// State shared by every subcommand.
pub struct Session {
    pub network: NetworkGraph,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}

impl Session {
    pub fn open(data_dir: Option<&Path>, format: OutputFormat) -> Result<Self> {
        let paths = resolve_dataset(data_dir).context("failed to locate the transit dataset")?;
        let network = load_network(&paths)
            .with_context(|| format!("failed to load dataset from {}", paths.root.display()))?;
        debug!(
            stations = network.stations().len(),
            lines = network.lines().len(),
            "dataset loaded"
        );
        let palette = if format.is_json() {
            ColorPalette::plain()
        } else {
            ColorPalette::detect()
        };
        Ok(Self {
            network,
            format,
            palette,
        })
    }
}

/// Map library failures to the messages shown to users.
pub fn handle_lib_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownStation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_station_message(&name, &suggestions))
        }
        LibError::UnknownLine { name, available } => anyhow::anyhow!(
            "Unknown line '{}'. Available lines: {}.",
            name,
            available.join(", ")
        ),
        other => anyhow::Error::new(other),
    }
}
