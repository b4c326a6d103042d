// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, opens the
// network once and dispatches to these handlers.

pub mod airlines;
pub mod airports;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use skyroute_lib::{ColumnLayout, FlightNetwork};

/// Open the route dataset with the default or overridden column layout.
///
/// The file itself is only read when a command first needs it, so a missing
/// dataset is reported by the command with its path.
pub fn open_network(data: Option<&Path>, layout: Option<&Path>) -> Result<FlightNetwork> {
    let layout = match layout {
        Some(path) => ColumnLayout::from_path(path)
            .with_context(|| format!("failed to load column layout from {}", path.display()))?,
        None => ColumnLayout::default(),
    };

    FlightNetwork::open(data, layout).context("failed to locate the route dataset")
}
