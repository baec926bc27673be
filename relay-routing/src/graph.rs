//! Route graph — petgraph DiGraph with a label index.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use relay_core::errors::RoutingError;
use relay_core::types::collections::FxHashMap;

/// A directed network of nodes connected by latency-weighted links.
///
/// Nodes are identified by string labels. Nodes referenced only as link
/// targets are created implicitly, so callers never need to pre-register
/// them. The graph is meant to be built once and queried read-only;
/// queries take `&self` and the type has no interior mutability, so a
/// built graph can be shared across threads.
pub struct RouteGraph {
    graph: DiGraph<String, f64>,
    index: FxHashMap<String, NodeIndex>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: FxHashMap::default(),
        }
    }

    /// Add a node, returning its index. Idempotent per label.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Add a directed link. Both endpoints are created if absent.
    ///
    /// Negative latencies are accepted here; [`validate`](Self::validate)
    /// rejects them when a query begins.
    pub fn add_link(&mut self, from: &str, to: &str, latency: f64) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.graph.add_edge(from, to, latency);
    }

    /// Look up a node index by label.
    pub fn node(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    /// Resolve a node index back to its label.
    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate the outgoing links of a node as `(target, latency)` pairs.
    pub fn links_from(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(idx).map(|e| (e.target(), *e.weight()))
    }

    /// Reject the graph if any link carries a negative latency.
    /// Runs before every search.
    pub fn validate(&self) -> Result<(), RoutingError> {
        for edge in self.graph.edge_references() {
            if *edge.weight() < 0.0 {
                return Err(RoutingError::NegativeLatency {
                    from: self.graph[edge.source()].clone(),
                    to: self.graph[edge.target()].clone(),
                    latency: *edge.weight(),
                });
            }
        }
        Ok(())
    }
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_link_creates_endpoints() {
        let mut g = RouteGraph::new();
        g.add_link("A", "B", 10.0);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.link_count(), 1);
        assert!(g.node("A").is_some());
        assert!(g.node("B").is_some());
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = RouteGraph::new();
        let first = g.add_node("A");
        let second = g.add_node("A");
        assert_eq!(first, second);
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn labels_round_trip() {
        let mut g = RouteGraph::new();
        let idx = g.add_node("core-router");
        assert_eq!(g.label(idx), "core-router");
    }

    #[test]
    fn validate_rejects_negative_latency() {
        let mut g = RouteGraph::new();
        g.add_link("A", "B", 10.0);
        g.add_link("B", "C", -3.0);
        let err = g.validate().unwrap_err();
        assert_eq!(
            err,
            RoutingError::NegativeLatency {
                from: "B".into(),
                to: "C".into(),
                latency: -3.0,
            }
        );
    }

    #[test]
    fn validate_accepts_zero_latency() {
        let mut g = RouteGraph::new();
        g.add_link("A", "B", 0.0);
        assert!(g.validate().is_ok());
    }
}
