//! Minimum-latency routing through networks with compression nodes.
//!
//! A compression node halves the latency of every link leaving it. The
//! search is Dijkstra with dominance pruning, generalized for that
//! per-node discount.

pub mod frontier;
pub mod graph;
pub mod search;

pub use graph::RouteGraph;
pub use search::{
    find_minimum_latency, find_minimum_latency_batch, shortest_route, Route, UNREACHABLE,
};
