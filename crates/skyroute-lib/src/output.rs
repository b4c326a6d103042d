use std::fmt::Write;

use serde::Serialize;

use crate::airports::AirportDirectory;
use crate::error::{Error, Result};
use crate::network::FlightNetwork;
use crate::routing::{RouteAlgorithm, RoutePlan};
use crate::source::RecordSource;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

/// Airport visited along an itinerary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

/// Single flight between two consecutive steps.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub airlines: Vec<String>,
}

/// One itinerary with resolved names and airlines.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathSummary {
    pub rank: usize,
    pub hops: usize,
    pub cost: f64,
    pub distance: f64,
    pub steps: Vec<RouteStep>,
    pub legs: Vec<RouteLeg>,
}

/// Structured representation of a route plan that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub paths: Vec<PathSummary>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with airport names and per-leg airlines.
    pub fn from_plan<S: RecordSource>(
        network: &FlightNetwork<S>,
        directory: &AirportDirectory,
        plan: &RoutePlan,
    ) -> Result<Self> {
        if plan.paths.is_empty() || plan.paths.iter().any(|path| path.steps.is_empty()) {
            return Err(Error::EmptyRoutePlan);
        }

        let endpoint = |code: &str| RouteEndpoint {
            code: code.to_string(),
            name: directory.name_of(code).map(str::to_string),
        };

        let mut paths = Vec::with_capacity(plan.paths.len());
        for (rank, path) in plan.paths.iter().enumerate() {
            let steps = path
                .steps
                .iter()
                .enumerate()
                .map(|(index, code)| RouteStep {
                    index,
                    code: code.clone(),
                    name: directory.name_of(code).map(str::to_string),
                })
                .collect();

            let mut legs = Vec::with_capacity(path.hop_count());
            for pair in path.steps.windows(2) {
                legs.push(RouteLeg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    airlines: network.airlines_between(&pair[0], &pair[1])?,
                });
            }

            paths.push(PathSummary {
                rank: rank + 1,
                hops: path.hop_count(),
                cost: path.cost,
                distance: path.distance,
                steps,
                legs,
            });
        }

        Ok(Self {
            algorithm: plan.algorithm,
            start: endpoint(&plan.start),
            goal: endpoint(&plan.goal),
            paths,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn heading(&self) -> &'static str {
        match self.algorithm {
            RouteAlgorithm::Cheapest => "Cheapest route",
            RouteAlgorithm::ShortestHops => "Shortest routes (ascending distance)",
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{}: {} -> {} (algorithm: {})",
            self.heading(),
            self.start.display_name(),
            self.goal.display_name(),
            self.algorithm
        );

        for path in &self.paths {
            let joined = path
                .steps
                .iter()
                .map(|step| format!("{} ({})", step.display_name(), step.code))
                .collect::<Vec<_>>()
                .join(" -> ");
            let _ = writeln!(buffer, "\nPath {} ({} flights):", path.rank, path.hops);
            let _ = writeln!(buffer, "  {joined}");
            for leg in &path.legs {
                let _ = writeln!(
                    buffer,
                    "  {} -> {}: {}",
                    leg.from,
                    leg.to,
                    leg.airlines.join(", ")
                );
            }
            let _ = writeln!(buffer, "  Cost: ${:.2}", path.cost);
            let _ = writeln!(buffer, "  Distance: {:.2} km", path.distance);
        }

        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}**: _{} → {}_ (algorithm: `{}`)",
            self.heading(),
            self.start.display_name(),
            self.goal.display_name(),
            self.algorithm
        );

        for path in &self.paths {
            let _ = writeln!(
                buffer,
                "\n### Path {} — {} flights, ${:.2}, {:.2} km",
                path.rank, path.hops, path.cost, path.distance
            );
            for step in &path.steps {
                let _ = writeln!(
                    buffer,
                    "* {:>2}. **{}** (`{}`)",
                    step.index,
                    step.display_name(),
                    step.code
                );
            }
        }

        buffer
    }
}
