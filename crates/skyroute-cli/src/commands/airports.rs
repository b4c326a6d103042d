//! Airports command handler for browsing the dataset by location.

use std::io;

use anyhow::{Context, Result};

use skyroute_lib::FlightNetwork;

use crate::output::OutputFormat;

/// Arguments for the airports command. At most one filter is set.
#[derive(Debug, Clone, Default)]
pub struct AirportsCommandArgs {
    pub country: Option<String>,
    pub city: Option<String>,
}

/// Handle the airports subcommand.
///
/// With no filter lists countries, with `--country` the cities of that
/// country, and with `--city` the airports of that city.
pub fn handle_airports_command(
    network: &FlightNetwork,
    format: OutputFormat,
    args: &AirportsCommandArgs,
) -> Result<()> {
    let (heading, items) = match (&args.country, &args.city) {
        (_, Some(city)) => (
            format!("Airports in {city}"),
            network.airports_in(city).context("failed to list airports")?,
        ),
        (Some(country), None) => (
            format!("Cities in {country}"),
            network.cities_in(country).context("failed to list cities")?,
        ),
        (None, None) => (
            "Countries".to_string(),
            network.countries().context("failed to list countries")?,
        ),
    };

    if items.is_empty() && format != OutputFormat::Json {
        println!("No matches found.");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    format
        .write_list(&mut stdout, &heading, &items)
        .context("failed to write listing")
}
