//! Route planning over a flight network.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (cheapest fare, fewest hops)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned routes with their cost and distance
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```ignore
//! use skyroute_lib::{plan_route, ColumnLayout, FlightNetwork, RouteRequest};
//!
//! let network = FlightNetwork::open(None, ColumnLayout::default())?;
//! let plan = plan_route(&network, &RouteRequest::cheapest("SIN", "NRT"))?;
//! println!("Cheapest fare: ${:.2}", plan.paths[0].cost);
//! ```

mod planner;

pub use planner::{
    select_planner, CheapestPlanner, RouteGraphs, RoutePlanner, ShortestHopsPlanner,
};

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::NodeId;
use crate::network::FlightNetwork;
use crate::path::path_distance;
use crate::source::RecordSource;

/// Number of alternatives returned by a fewest-hops search unless requested otherwise.
pub const DEFAULT_MAX_PATHS: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Lowest total ticket cost (uniform-cost search).
    #[default]
    Cheapest,
    /// Fewest flights, several alternatives (breadth-first search).
    ShortestHops,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Cheapest => "cheapest",
            RouteAlgorithm::ShortestHops => "shortest-hops",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
///
/// `from` and `to` accept airport codes or airport names.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
    pub algorithm: RouteAlgorithm,
    /// Upper bound on alternatives for [`RouteAlgorithm::ShortestHops`].
    pub max_paths: usize,
}

impl RouteRequest {
    /// Convenience constructor for a cheapest-fare request.
    pub fn cheapest(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            algorithm: RouteAlgorithm::Cheapest,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }

    /// Convenience constructor for a fewest-hops request.
    pub fn shortest_hops(from: impl Into<String>, to: impl Into<String>, max_paths: usize) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            algorithm: RouteAlgorithm::ShortestHops,
            max_paths,
        }
    }
}

/// One concrete itinerary with its totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedPath {
    pub steps: Vec<NodeId>,
    pub cost: f64,
    pub distance: f64,
}

impl PlannedPath {
    fn measure(graphs: &RouteGraphs, steps: Vec<NodeId>) -> Result<Self> {
        let cost = path_distance(&graphs.cost, &steps)?;
        let distance = path_distance(&graphs.distance, &steps)?;
        Ok(Self {
            steps,
            cost,
            distance,
        })
    }

    /// Number of flights in the itinerary.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Planned routes returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub paths: Vec<PlannedPath>,
}

impl RoutePlan {
    /// The preferred itinerary (first in presentation order).
    pub fn best(&self) -> Option<&PlannedPath> {
        self.paths.first()
    }
}

/// Compute routes using the requested algorithm.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves airport codes or names through the airport directory
/// 2. Rejects identical endpoints
/// 3. Builds the cost and distance graphs
/// 4. Checks both endpoints have departing routes
/// 5. Runs the selected planner and measures each path
pub fn plan_route<S: RecordSource>(
    network: &FlightNetwork<S>,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    // Step 1: Resolve airports
    let directory = network.directory()?;
    let start = directory.resolve(&request.from)?.code.clone();
    let goal = directory.resolve(&request.to)?.code.clone();

    // Step 2: Reject identical endpoints
    if start == goal {
        return Err(Error::SameEndpoints { code: start });
    }

    // Step 3: Build graphs
    let graphs = RouteGraphs {
        cost: network.cost_graph()?,
        distance: network.distance_graph()?,
    };

    // Step 4: Both endpoints must be served
    for code in [&start, &goal] {
        if !graphs.distance.contains(code) {
            return Err(Error::AirportNotServed { code: code.clone() });
        }
    }

    // Step 5: Execute pathfinding
    let planner = select_planner(request);
    let found = planner.find_paths(&graphs, &start, &goal);
    if found.is_empty() {
        return Err(Error::RouteNotFound { start, goal });
    }

    let mut paths = found
        .into_iter()
        .map(|steps| PlannedPath::measure(&graphs, steps))
        .collect::<Result<Vec<_>>>()?;
    planner.rank(&mut paths);

    debug!(
        algorithm = %planner.algorithm(),
        paths = paths.len(),
        "route planning finished"
    );
    info!(%start, %goal, algorithm = %request.algorithm, "planned route");

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start,
        goal,
        paths,
    })
}
