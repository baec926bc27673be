//! Compression-aware minimum-latency search.
//!
//! Dijkstra with dominance pruning: a frontier entry whose latency
//! exceeds the recorded best for its node is stale and discarded, which
//! bounds the work on cyclic graphs and makes the first extraction of
//! the destination provably optimal under non-negative latencies.

pub mod types;

use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use tracing::debug;

use relay_core::errors::RoutingError;
use relay_core::types::collections::{FxHashMap, FxHashSet};

use crate::frontier::Frontier;
use crate::graph::RouteGraph;

pub use types::{Route, UNREACHABLE};

/// Minimum cumulative latency from `source` to `destination`.
///
/// Links leaving a compression node are charged at half their nominal
/// latency. Compression labels absent from the graph are inert. Returns
/// [`UNREACHABLE`] when no path exists and `0.0` when source equals
/// destination, regardless of graph content. Fails fast with
/// [`RoutingError::NegativeLatency`] before searching if any link
/// carries a negative latency.
pub fn find_minimum_latency(
    graph: &RouteGraph,
    compression: &[&str],
    source: &str,
    destination: &str,
) -> Result<f64, RoutingError> {
    graph.validate()?;
    let compressed = resolve_compression(graph, compression);
    Ok(minimum_latency(graph, &compressed, source, destination))
}

/// Like [`find_minimum_latency`], but also reports the winning node
/// sequence for diagnostics. `None` when the destination is unreachable.
pub fn shortest_route(
    graph: &RouteGraph,
    compression: &[&str],
    source: &str,
    destination: &str,
) -> Result<Option<Route>, RoutingError> {
    graph.validate()?;
    let compressed = resolve_compression(graph, compression);

    if source == destination {
        return Ok(Some(Route {
            nodes: vec![source.to_string()],
            latency: 0.0,
        }));
    }

    let (Some(from), Some(to)) = (graph.node(source), graph.node(destination)) else {
        return Ok(None);
    };

    let Some(settled) = settle(graph, &compressed, from, to) else {
        return Ok(None);
    };

    // Walk the parent chain back from the destination.
    let mut nodes = vec![graph.label(to).to_string()];
    let mut current = to;
    while let Some(&parent) = settled.parents.get(&current) {
        nodes.push(graph.label(parent).to_string());
        current = parent;
    }
    nodes.reverse();

    Ok(Some(Route {
        nodes,
        latency: settled.latency,
    }))
}

/// Run many independent queries against one graph in parallel.
///
/// Validation and compression resolution happen once; each query then
/// runs with purely call-local state, so the fan-out needs no
/// coordination beyond the shared read-only graph.
pub fn find_minimum_latency_batch(
    graph: &RouteGraph,
    compression: &[&str],
    queries: &[(&str, &str)],
) -> Result<Vec<f64>, RoutingError> {
    graph.validate()?;
    let compressed = resolve_compression(graph, compression);
    debug!(queries = queries.len(), "running batch latency queries");

    Ok(queries
        .par_iter()
        .map(|(source, destination)| minimum_latency(graph, &compressed, source, destination))
        .collect())
}

/// Resolve compression labels to node indices, dropping unknown labels.
fn resolve_compression(graph: &RouteGraph, compression: &[&str]) -> FxHashSet<NodeIndex> {
    compression
        .iter()
        .filter_map(|label| graph.node(label))
        .collect()
}

fn minimum_latency(
    graph: &RouteGraph,
    compressed: &FxHashSet<NodeIndex>,
    source: &str,
    destination: &str,
) -> f64 {
    if source == destination {
        return 0.0;
    }
    let (Some(from), Some(to)) = (graph.node(source), graph.node(destination)) else {
        return UNREACHABLE;
    };
    settle(graph, compressed, from, to).map_or(UNREACHABLE, |s| s.latency)
}

/// Destination latency plus the parent chain that produced it.
struct Settled {
    latency: f64,
    parents: FxHashMap<NodeIndex, NodeIndex>,
}

/// Core search loop. Returns `None` when the frontier drains without
/// settling the destination.
fn settle(
    graph: &RouteGraph,
    compressed: &FxHashSet<NodeIndex>,
    from: NodeIndex,
    to: NodeIndex,
) -> Option<Settled> {
    let mut best: FxHashMap<NodeIndex, f64> = FxHashMap::default();
    let mut parents: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
    let mut frontier = Frontier::new();

    best.insert(from, 0.0);
    frontier.push(from, 0.0);

    while let Some((node, latency)) = frontier.pop() {
        // Stale entry: a cheaper path to this node was already settled.
        if let Some(&recorded) = best.get(&node) {
            if latency > recorded {
                continue;
            }
        }

        // First non-stale extraction of the destination is the global
        // minimum; no need to drain the rest of the frontier.
        if node == to {
            return Some(Settled { latency, parents });
        }

        let halve = compressed.contains(&node);
        for (target, nominal) in graph.links_from(node) {
            let cost = if halve { nominal / 2.0 } else { nominal };
            let next = latency + cost;

            let improves = best.get(&target).map(|&d| next < d).unwrap_or(true);
            if improves {
                best.insert(target, next);
                parents.insert(target, node);
                frontier.push(target, next);
            }
        }
    }

    None
}
