//! Airlines command handler for listing carriers on a direct leg.

use std::io;

use anyhow::{Context, Result};

use skyroute_lib::{Error as LibError, FlightNetwork};

use crate::commands::route::format_unknown_airport_message;
use crate::output::OutputFormat;

/// Arguments for the airlines command.
#[derive(Debug, Clone)]
pub struct AirlinesCommandArgs {
    /// Departure airport code or name.
    pub from: String,
    /// Arrival airport code or name.
    pub to: String,
}

/// Handle the airlines subcommand.
pub fn handle_airlines_command(
    network: &FlightNetwork,
    format: OutputFormat,
    args: &AirlinesCommandArgs,
) -> Result<()> {
    let directory = network
        .directory()
        .context("failed to load airport directory")?;
    let resolve = |query: &str| -> Result<String> {
        match directory.resolve(query) {
            Ok(airport) => Ok(airport.code.clone()),
            Err(LibError::UnknownAirport { query, suggestions }) => Err(anyhow::anyhow!(
                format_unknown_airport_message(&query, &suggestions)
            )),
            Err(other) => Err(other.into()),
        }
    };
    let from = resolve(&args.from)?;
    let to = resolve(&args.to)?;

    let airlines = network
        .airlines_between(&from, &to)
        .context("failed to list airlines")?;

    if airlines.is_empty() && format != OutputFormat::Json {
        println!("No direct flights from {from} to {to}.");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    format
        .write_list(&mut stdout, &format!("Airlines from {from} to {to}"), &airlines)
        .context("failed to write listing")
}
