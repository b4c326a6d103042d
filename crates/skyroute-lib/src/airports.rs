use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use strsim::jaro_winkler;

use crate::dataset::ColumnLayout;
use crate::error::{Error, Result};
use crate::graph::field;
use crate::source::RecordSource;

/// Minimum similarity for an airport to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Airport metadata gathered from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Lookup table from airport codes and names to [`Airport`] records.
///
/// Codes match case-insensitively. Names must match exactly apart from case.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: HashMap<String, Airport>,
    name_to_code: HashMap<String, String>,
}

impl AirportDirectory {
    /// Collect every airport mentioned on either side of a route.
    ///
    /// The first row that mentions a code determines its metadata.
    /// Coordinates that do not parse are left empty.
    pub fn load<S>(source: &S, layout: &ColumnLayout) -> Result<Self>
    where
        S: RecordSource + ?Sized,
    {
        let rows = source.records()?;
        let mut directory = Self::default();

        for (index, row) in rows.iter().enumerate() {
            let sides = [
                (
                    layout.source_code,
                    layout.source_name,
                    layout.source_city,
                    layout.source_country,
                    layout.source_latitude,
                    layout.source_longitude,
                ),
                (
                    layout.destination_code,
                    layout.destination_name,
                    layout.destination_city,
                    layout.destination_country,
                    layout.destination_latitude,
                    layout.destination_longitude,
                ),
            ];

            for (code, name, city, country, latitude, longitude) in sides {
                let code = field(row, index, code)?;
                if directory.get(code).is_some() {
                    continue;
                }
                let coordinate = |column: usize| -> Option<f64> {
                    row.get(column).and_then(|value| value.parse().ok())
                };
                directory.insert(Airport {
                    code: code.to_string(),
                    name: field(row, index, name)?.to_string(),
                    city: field(row, index, city)?.to_string(),
                    country: field(row, index, country)?.to_string(),
                    latitude: coordinate(latitude),
                    longitude: coordinate(longitude),
                });
            }
        }

        tracing::debug!(airports = directory.len(), "loaded airport directory");
        Ok(directory)
    }

    /// Build a directory from already-known airports.
    pub fn from_airports(airports: impl IntoIterator<Item = Airport>) -> Self {
        let mut directory = Self::default();
        for airport in airports {
            directory.insert(airport);
        }
        directory
    }

    fn insert(&mut self, airport: Airport) {
        self.name_to_code
            .entry(airport.name.to_lowercase())
            .or_insert_with(|| airport.code.clone());
        self.airports
            .entry(normalize_code(&airport.code))
            .or_insert(airport);
    }

    /// Look up an airport by code.
    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&normalize_code(code))
    }

    /// Airport name for a code.
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.get(code).map(|airport| airport.name.as_str())
    }

    /// Airport code for a name.
    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_code
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Resolve user input that is either an airport code or an airport name.
    pub fn resolve(&self, query: &str) -> Result<&Airport> {
        let query = query.trim();
        if let Some(airport) = self.get(query) {
            return Ok(airport);
        }
        if let Some(airport) = self.code_for_name(query).and_then(|code| self.get(code)) {
            return Ok(airport);
        }

        Err(Error::UnknownAirport {
            query: query.to_string(),
            suggestions: self.fuzzy_matches(query, 3),
        })
    }

    /// Codes or names similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        let mut scored: Vec<(f64, &str)> = Vec::new();

        for airport in self.airports.values() {
            let by_code = jaro_winkler(&needle, &airport.code.to_lowercase());
            let by_name = jaro_winkler(&needle, &airport.name.to_lowercase());
            let (score, label) = if by_code >= by_name {
                (by_code, airport.code.as_str())
            } else {
                (by_name, airport.name.as_str())
            };
            if score >= SUGGESTION_THRESHOLD {
                scored.push((score, label));
            }
        }

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, label)| label.to_string())
            .collect()
    }

    /// All airports sorted by code.
    pub fn airports(&self) -> Vec<&Airport> {
        let mut airports: Vec<&Airport> = self.airports.values().collect();
        airports.sort_by(|a, b| a.code.cmp(&b.code));
        airports
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
