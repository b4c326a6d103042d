//! Route planning strategies.
//!
//! Each algorithm is wrapped in a [`RoutePlanner`] so [`super::plan_route`]
//! can validate endpoints and measure paths the same way regardless of how the
//! paths were found.

use crate::graph::{NodeId, WeightedGraph};
use crate::path::{cheapest_path, k_shortest_hops};

use super::{PlannedPath, RouteAlgorithm, RouteRequest};

/// Graphs built for a single planning request.
#[derive(Debug, Clone, Default)]
pub struct RouteGraphs {
    /// Edges weighted by ticket cost.
    pub cost: WeightedGraph,
    /// Edges weighted by flight distance.
    pub distance: WeightedGraph,
}

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Find candidate paths from `start` to `goal`. An empty result means no
    /// route exists.
    fn find_paths(&self, graphs: &RouteGraphs, start: &str, goal: &str) -> Vec<Vec<NodeId>>;

    /// Put measured paths into presentation order.
    fn rank(&self, _paths: &mut [PlannedPath]) {}
}

/// Cheapest-fare planner backed by uniform-cost search over the cost graph.
#[derive(Debug, Clone, Default)]
pub struct CheapestPlanner;

impl RoutePlanner for CheapestPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Cheapest
    }

    fn find_paths(&self, graphs: &RouteGraphs, start: &str, goal: &str) -> Vec<Vec<NodeId>> {
        cheapest_path(&graphs.cost, start, goal)
            .path
            .into_iter()
            .collect()
    }
}

/// Fewest-hops planner returning several alternatives.
///
/// Searches the unweighted view of the distance graph, then orders the
/// results by total distance, shortest first.
#[derive(Debug, Clone)]
pub struct ShortestHopsPlanner {
    max_paths: usize,
}

impl ShortestHopsPlanner {
    pub fn new(max_paths: usize) -> Self {
        Self { max_paths }
    }
}

impl RoutePlanner for ShortestHopsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::ShortestHops
    }

    fn find_paths(&self, graphs: &RouteGraphs, start: &str, goal: &str) -> Vec<Vec<NodeId>> {
        let hops = graphs.distance.hop_graph();
        k_shortest_hops(&hops, start, goal, self.max_paths)
    }

    fn rank(&self, paths: &mut [PlannedPath]) {
        paths.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }
}

/// Select the planner matching the request's algorithm.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Cheapest => Box::new(CheapestPlanner),
        RouteAlgorithm::ShortestHops => Box::new(ShortestHopsPlanner::new(request.max_paths)),
    }
}
