use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::{HopGraph, NodeId, WeightedGraph};

/// Outcome of [`cheapest_path`].
///
/// A missing route is not an error: `path` is `None` and `cost` is positive
/// infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestPath {
    pub path: Option<Vec<NodeId>>,
    pub cost: f64,
}

impl CheapestPath {
    pub fn not_found() -> Self {
        Self {
            path: None,
            cost: f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges in the path, when one was found.
    pub fn hop_count(&self) -> Option<usize> {
        self.path
            .as_ref()
            .map(|path| path.len().saturating_sub(1))
    }
}

/// Uniform-cost search for the minimum total weight path from `start` to `goal`.
///
/// Edge weights must be non-negative. Ties between equal-cost frontier entries
/// are broken by node identifier so results are reproducible. Nodes missing
/// from the graph simply yield no path, except that `start == goal` always
/// returns the single-node path at cost zero.
pub fn cheapest_path<'a>(graph: &'a WeightedGraph, start: &'a str, goal: &str) -> CheapestPath {
    let mut frontier = BinaryHeap::new();
    let mut best: HashMap<&'a str, (f64, Option<&'a str>)> = HashMap::new();
    let mut closed: HashSet<&'a str> = HashSet::new();

    best.insert(start, (0.0, None));
    frontier.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = frontier.pop() {
        let current = entry.node;
        let current_cost = entry.cost.0;

        if current == goal {
            let path = reconstruct_path(&best, current);
            trace!(expanded = closed.len(), cost = current_cost, "cheapest path found");
            return CheapestPath {
                path: Some(path),
                cost: current_cost,
            };
        }

        // Stale duplicate of a node that was already finalised.
        if !closed.insert(current) {
            continue;
        }

        for edge in graph.neighbours(current) {
            let next = edge.target.as_str();
            if closed.contains(next) {
                continue;
            }

            let tentative = current_cost + edge.weight;
            let improves = best
                .get(next)
                .map_or(true, |(known, _)| tentative < *known);
            if improves {
                best.insert(next, (tentative, Some(current)));
                frontier.push(QueueEntry::new(next, tentative));
            }
        }
    }

    trace!(expanded = closed.len(), "frontier exhausted without reaching goal");
    CheapestPath::not_found()
}

/// Breadth-first enumeration of up to `max_paths` paths from `source` to
/// `destination`, in discovery order.
///
/// The visited set is shared by the whole search rather than tracked per path:
/// once a node has been dequeued as a non-destination it is never enqueued
/// again, so later paths cannot reuse nodes consumed by earlier ones. The
/// result is therefore not the k shortest simple paths in general. The first
/// path found is always one with the fewest hops.
///
/// Returns an empty list when either endpoint is not a key of `graph`, or when
/// `max_paths` is zero.
pub fn k_shortest_hops<'a>(
    graph: &'a HopGraph,
    source: &'a str,
    destination: &str,
    max_paths: usize,
) -> Vec<Vec<NodeId>> {
    let mut paths = Vec::new();
    if max_paths == 0 || !graph.contains(source) || !graph.contains(destination) {
        return paths;
    }

    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut queue: VecDeque<(&'a str, Vec<&'a str>)> = VecDeque::new();
    queue.push_back((source, vec![source]));

    while paths.len() < max_paths {
        let Some((current, path)) = queue.pop_front() else {
            break;
        };

        if current == destination {
            paths.push(path.into_iter().map(str::to_string).collect());
            continue;
        }

        visited.insert(current);

        for next in graph.neighbours(current) {
            let next = next.as_str();
            if visited.contains(next) {
                continue;
            }
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(next);
            queue.push_back((next, extended));
        }
    }

    trace!(found = paths.len(), visited = visited.len(), "hop search finished");
    paths
}

/// Sum the edge weights along `path`.
///
/// Fails with [`Error::MissingEdge`] when a consecutive pair has no weighted
/// edge. Paths with fewer than two nodes have distance zero.
pub fn path_distance<S: AsRef<str>>(graph: &WeightedGraph, path: &[S]) -> Result<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let from = pair[0].as_ref();
        let to = pair[1].as_ref();
        graph
            .weight(from, to)
            .map(|weight| total + weight)
            .ok_or_else(|| Error::MissingEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
    })
}

fn reconstruct_path(best: &HashMap<&str, (f64, Option<&str>)>, goal: &str) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        current = best.get(node).and_then(|(_, parent)| *parent);
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then node.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_lowest_cost_then_lowest_node() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new("C", 1.0));
        heap.push(QueueEntry::new("B", 1.0));
        heap.push(QueueEntry::new("A", 3.0));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|entry| entry.node)).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn equal_cost_ties_resolve_by_identifier() {
        let graph = WeightedGraph::from_adjacency([
            ("S", vec![("Y", 1.0), ("X", 1.0)]),
            ("X", vec![("T", 1.0)]),
            ("Y", vec![("T", 1.0)]),
        ]);

        let result = cheapest_path(&graph, "S", "T");
        assert_eq!(
            result.path,
            Some(vec!["S".to_string(), "X".to_string(), "T".to_string()])
        );
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn not_found_reports_infinite_cost() {
        let missing = CheapestPath::not_found();
        assert!(!missing.is_found());
        assert!(missing.cost.is_infinite());
        assert_eq!(missing.hop_count(), None);
    }
}
