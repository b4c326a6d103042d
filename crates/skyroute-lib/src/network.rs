//! Flight network facade over a tabular dataset.
//!
//! [`FlightNetwork`] pairs a [`RecordSource`] with the [`ColumnLayout`] that
//! describes it and exposes the graphs and lookups the routing layer needs.
//! Nothing is cached here: every call rebuilds from the source, so a
//! [`crate::SnapshotSource`] is the way to avoid repeated file scans.

use std::collections::HashSet;
use std::path::Path;

use crate::airports::AirportDirectory;
use crate::dataset::{resolve_dataset_path, ColumnLayout};
use crate::error::Result;
use crate::graph::{build_hop_graph, build_weighted_graph, column_values, field, WeightedGraph};
use crate::source::{CsvFileSource, RecordSource};

/// Route dataset plus the column layout used to interpret it.
#[derive(Debug, Clone)]
pub struct FlightNetwork<S = CsvFileSource> {
    source: S,
    layout: ColumnLayout,
}

impl FlightNetwork<CsvFileSource> {
    /// Open the dataset resolved from `target` (see [`resolve_dataset_path`]).
    pub fn open(target: Option<&Path>, layout: ColumnLayout) -> Result<Self> {
        let path = resolve_dataset_path(target)?;
        Ok(Self::new(CsvFileSource::new(path), layout))
    }
}

impl<S: RecordSource> FlightNetwork<S> {
    pub fn new(source: S, layout: ColumnLayout) -> Self {
        Self { source, layout }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Airport-to-airport graph weighted by ticket cost.
    pub fn cost_graph(&self) -> Result<WeightedGraph> {
        build_weighted_graph(
            &self.source,
            self.layout.source_code,
            self.layout.destination_code,
            self.layout.cost,
        )
    }

    /// Airport-to-airport graph weighted by flight distance.
    pub fn distance_graph(&self) -> Result<WeightedGraph> {
        build_weighted_graph(
            &self.source,
            self.layout.source_code,
            self.layout.destination_code,
            self.layout.distance,
        )
    }

    pub fn directory(&self) -> Result<AirportDirectory> {
        AirportDirectory::load(&self.source, &self.layout)
    }

    /// Countries with at least one departing route, sorted.
    pub fn countries(&self) -> Result<Vec<String>> {
        let mut countries = column_values(&self.source, self.layout.source_country)?;
        countries.sort();
        Ok(countries)
    }

    /// Departure cities within `country`, in dataset order.
    pub fn cities_in(&self, country: &str) -> Result<Vec<String>> {
        let graph = build_hop_graph(
            &self.source,
            self.layout.source_country,
            self.layout.source_city,
        )?;
        Ok(graph.neighbours(country).to_vec())
    }

    /// Departure airport names within `city`, in dataset order.
    pub fn airports_in(&self, city: &str) -> Result<Vec<String>> {
        let graph = build_hop_graph(&self.source, self.layout.source_city, self.layout.source_name)?;
        Ok(graph.neighbours(city).to_vec())
    }

    /// Distinct airlines flying `from -> to` (airport codes), in dataset order.
    pub fn airlines_between(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let rows = self.source.records()?;
        let mut seen = HashSet::new();
        let mut airlines = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            if field(row, index, self.layout.source_code)? != from
                || field(row, index, self.layout.destination_code)? != to
            {
                continue;
            }
            let airline = field(row, index, self.layout.airline)?;
            if seen.insert(airline) {
                airlines.push(airline.to_string());
            }
        }

        Ok(airlines)
    }
}
