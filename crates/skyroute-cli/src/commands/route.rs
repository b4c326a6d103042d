//! Route command handler for planning itineraries between airports.

use std::io;

use anyhow::{Context, Result};
use clap::ValueEnum;

use skyroute_lib::{
    plan_route, Error as RouteError, FlightNetwork, RouteAlgorithm, RouteRequest, RouteSummary,
};

use crate::output::OutputFormat;

/// Search strategy accepted by `--algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Lowest total fare.
    #[default]
    Cheapest,
    /// Fewest flights, several alternatives sorted by distance.
    ShortestHops,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Cheapest => RouteAlgorithm::Cheapest,
            AlgorithmArg::ShortestHops => RouteAlgorithm::ShortestHops,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Departure airport code or name.
    pub from: String,
    /// Arrival airport code or name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: AlgorithmArg,
    /// Maximum alternatives for the fewest-hops search.
    pub paths: usize,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            algorithm: self.algorithm.into(),
            max_paths: self.paths,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network: &FlightNetwork,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request();
    let plan = match plan_route(network, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };

    let directory = network
        .directory()
        .context("failed to load airport directory")?;
    let summary = RouteSummary::from_plan(network, &directory, &plan)
        .context("failed to build route summary for display")?;

    let mut stdout = io::stdout().lock();
    format
        .write_route(&mut stdout, &summary)
        .context("failed to write route")
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport { query, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&query, &suggestions))
        }
        RouteError::SameEndpoints { code } => {
            anyhow::anyhow!("Departure and arrival are both {code}. Pick two different airports.")
        }
        RouteError::AirportNotServed { code } => anyhow::anyhow!(
            "Airport {code} has no departing flights in the dataset, so no route can be planned through it."
        ),
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!("No route found from {start} to {goal}.")
        }
        other => anyhow::Error::new(other).context("route planning failed"),
    }
}

/// Friendly message for an unresolved airport, shared with the airlines command.
pub(crate) fn format_unknown_airport_message(query: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{}'.", query);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}
