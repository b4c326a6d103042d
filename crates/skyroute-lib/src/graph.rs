use std::collections::{HashMap, HashSet};

use csv::StringRecord;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::source::{row_number, RecordSource};

/// Identifier naming a location in the network (airport code, city, country...).
pub type NodeId = String;

/// One row of the dataset reduced to the columns a graph cares about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: Option<f64>,
}

/// Weighted edge within a [`WeightedGraph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub target: NodeId,
    pub weight: f64,
}

/// Adjacency mapping from node to weighted neighbours.
///
/// Neighbours keep the order in which they were first seen. Inserting an edge
/// that already exists overwrites its weight in place, so the last-seen weight
/// wins without reordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    adjacency: HashMap<NodeId, Vec<WeightedEdge>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(node, [(neighbour, weight)])` entries.
    ///
    /// Nodes listed with no neighbours still become keys of the mapping.
    pub fn from_adjacency<I, N, E, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<NodeId>,
        E: IntoIterator<Item = (S, f64)>,
        S: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (node, edges) in entries {
            let node = node.into();
            graph.adjacency.entry(node.clone()).or_default();
            for (target, weight) in edges {
                graph.insert_edge(node.clone(), target.into(), weight);
            }
        }
        graph
    }

    /// Set (or overwrite) the weight of `source -> destination`.
    pub fn insert_edge(&mut self, source: NodeId, destination: NodeId, weight: f64) {
        let edges = self.adjacency.entry(source).or_default();
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == destination) {
            existing.weight = weight;
            return;
        }
        edges.push(WeightedEdge {
            target: destination,
            weight,
        });
    }

    /// Whether `node` is a key of the mapping.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Outgoing edges of `node`; empty when the node is not a key.
    pub fn neighbours(&self, node: &str) -> &[WeightedEdge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the direct edge `from -> to`, if any.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Unweighted view with the same keys and neighbour order.
    pub fn hop_graph(&self) -> HopGraph {
        HopGraph {
            adjacency: self
                .adjacency
                .iter()
                .map(|(node, edges)| {
                    let targets = edges.iter().map(|edge| edge.target.clone()).collect();
                    (node.clone(), targets)
                })
                .collect(),
        }
    }
}

/// Adjacency mapping from node to distinct neighbours in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HopGraph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl HopGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(node, [neighbour])` entries.
    pub fn from_adjacency<I, N, E, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<NodeId>,
        E: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (node, targets) in entries {
            let node = node.into();
            graph.adjacency.entry(node.clone()).or_default();
            for target in targets {
                graph.insert_edge(node.clone(), target.into());
            }
        }
        graph
    }

    /// Append `destination` to `source`'s neighbours unless already present.
    pub fn insert_edge(&mut self, source: NodeId, destination: NodeId) {
        let targets = self.adjacency.entry(source).or_default();
        if !targets.contains(&destination) {
            targets.push(destination);
        }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn neighbours(&self, node: &str) -> &[NodeId] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Result of [`construct_adjacency`]: weighted when a weight column was given.
#[derive(Debug, Clone, PartialEq)]
pub enum Adjacency {
    Weighted(WeightedGraph),
    Unweighted(HopGraph),
}

impl Adjacency {
    pub fn into_weighted(self) -> Option<WeightedGraph> {
        match self {
            Adjacency::Weighted(graph) => Some(graph),
            Adjacency::Unweighted(_) => None,
        }
    }

    pub fn into_unweighted(self) -> Option<HopGraph> {
        match self {
            Adjacency::Unweighted(graph) => Some(graph),
            Adjacency::Weighted(_) => None,
        }
    }
}

/// Build an adjacency mapping from the source, weighted when `weight_column`
/// is `Some`.
///
/// The source is scanned in full on every call. Any row that lacks one of the
/// requested columns, or carries a weight that is not a number, fails the
/// whole build.
pub fn construct_adjacency<S>(
    source: &S,
    source_column: usize,
    destination_column: usize,
    weight_column: Option<usize>,
) -> Result<Adjacency>
where
    S: RecordSource + ?Sized,
{
    match weight_column {
        Some(weight) => {
            build_weighted_graph(source, source_column, destination_column, weight)
                .map(Adjacency::Weighted)
        }
        None => {
            build_hop_graph(source, source_column, destination_column).map(Adjacency::Unweighted)
        }
    }
}

/// Build a weighted graph keyed by `source_column` with weights from `weight_column`.
pub fn build_weighted_graph<S>(
    source: &S,
    source_column: usize,
    destination_column: usize,
    weight_column: usize,
) -> Result<WeightedGraph>
where
    S: RecordSource + ?Sized,
{
    let records = edge_records(source, source_column, destination_column, Some(weight_column))?;
    let rows = records.len();

    let mut graph = WeightedGraph::new();
    for record in records {
        if let Some(weight) = record.weight {
            graph.insert_edge(record.source, record.destination, weight);
        }
    }

    debug!(
        rows,
        nodes = graph.len(),
        source_column,
        destination_column,
        weight_column,
        "built weighted adjacency"
    );
    Ok(graph)
}

/// Build an unweighted graph keyed by `source_column`.
pub fn build_hop_graph<S>(
    source: &S,
    source_column: usize,
    destination_column: usize,
) -> Result<HopGraph>
where
    S: RecordSource + ?Sized,
{
    let records = edge_records(source, source_column, destination_column, None)?;
    let rows = records.len();

    let mut graph = HopGraph::new();
    for record in records {
        graph.insert_edge(record.source, record.destination);
    }

    debug!(
        rows,
        nodes = graph.len(),
        source_column,
        destination_column,
        "built unweighted adjacency"
    );
    Ok(graph)
}

/// Read every row of the source as an [`EdgeRecord`].
pub fn edge_records<S>(
    source: &S,
    source_column: usize,
    destination_column: usize,
    weight_column: Option<usize>,
) -> Result<Vec<EdgeRecord>>
where
    S: RecordSource + ?Sized,
{
    let rows = source.records()?;
    let mut records = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let from = field(row, index, source_column)?;
        let to = field(row, index, destination_column)?;
        let weight = match weight_column {
            Some(column) => Some(parse_weight(row, index, column)?),
            None => None,
        };

        records.push(EdgeRecord {
            source: from.to_string(),
            destination: to.to_string(),
            weight,
        });
    }

    Ok(records)
}

/// Distinct values of one column in first-seen order.
pub fn column_values<S>(source: &S, column: usize) -> Result<Vec<String>>
where
    S: RecordSource + ?Sized,
{
    let rows = source.records()?;
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let value = field(row, index, column)?;
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }

    Ok(values)
}

pub(crate) fn field(record: &StringRecord, index: usize, column: usize) -> Result<&str> {
    record.get(column).ok_or_else(|| Error::MalformedRecord {
        row: row_number(index, record),
        column,
        reason: format!("row has only {} columns", record.len()),
    })
}

fn parse_weight(record: &StringRecord, index: usize, column: usize) -> Result<f64> {
    let raw = field(record, index, column)?;
    raw.parse::<f64>().map_err(|err| Error::MalformedRecord {
        row: row_number(index, record),
        column,
        reason: format!("invalid weight '{raw}': {err}"),
    })
}
