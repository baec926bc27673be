//! Search result types.

use serde::{Deserialize, Serialize};

/// Sentinel latency for a destination with no path from the source.
///
/// Unreachability is an expected outcome, not an error, so it travels
/// through the return value rather than the error channel.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A winning route: the node sequence from source to destination and
/// its cumulative latency.
///
/// The node sequence exists for diagnostics; the latency alone is the
/// contractual result of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Node labels in traversal order, source first.
    pub nodes: Vec<String>,
    /// Cumulative latency along the route, discounts applied.
    pub latency: f64,
}

impl Route {
    /// Number of links traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
