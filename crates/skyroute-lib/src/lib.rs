//! Skyroute library entry points.
//!
//! This crate exposes helpers to locate the route dataset, build graph
//! representations from its rows, and run the two pathfinding algorithms
//! (cheapest fare, fewest hops). Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod airports;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod source;

pub use airports::{Airport, AirportDirectory};
pub use dataset::{default_dataset_path, resolve_dataset_path, ColumnLayout, DATA_DIR_ENV};
pub use error::{Error, Result};
pub use graph::{
    build_hop_graph, build_weighted_graph, column_values, construct_adjacency, edge_records,
    Adjacency, EdgeRecord, HopGraph, NodeId, WeightedEdge, WeightedGraph,
};
pub use network::FlightNetwork;
pub use output::{PathSummary, RouteEndpoint, RouteLeg, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{cheapest_path, k_shortest_hops, path_distance, CheapestPath};
pub use routing::{
    plan_route, PlannedPath, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest,
    DEFAULT_MAX_PATHS,
};
pub use source::{CsvFileSource, RecordSource, SnapshotSource};
