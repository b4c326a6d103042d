use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing tabular source could not be opened or read.
    #[error("route dataset unavailable at {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row was missing a required column or carried a non-numeric weight.
    #[error("malformed record at row {row}, column {column}: {reason}")]
    MalformedRecord {
        row: usize,
        column: usize,
        reason: String,
    },

    /// Raised when a path references a pair of airports without a weighted edge.
    #[error("no weighted edge from {from} to {to}")]
    MissingEdge { from: String, to: String },

    /// Raised when an airport code or name could not be found in the dataset.
    #[error("unknown airport: {query}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        query: String,
        suggestions: Vec<String>,
    },

    /// Raised when a route request names the same airport at both ends.
    #[error("source and destination airport cannot be the same ({code})")]
    SameEndpoints { code: String },

    /// Raised when an airport exists but has no outbound routes in the network.
    #[error("airport {code} has no outbound routes in the network")]
    AirportNotServed { code: String },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any airports.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the route dataset")]
    ProjectDirsUnavailable,

    /// Raised when a column layout override cannot be parsed.
    #[error("invalid column layout in {path}: {message}")]
    LayoutConfig { path: PathBuf, message: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
