//! Routing errors.

use super::error_code::{self, RelayErrorCode};

/// Errors that can occur while validating a routing query.
///
/// An unreachable destination is not an error; it is reported through
/// the infinity sentinel on the query result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    #[error("negative latency on link {from} -> {to}: {latency}")]
    NegativeLatency {
        from: String,
        to: String,
        latency: f64,
    },
}

impl RelayErrorCode for RoutingError {
    fn error_code(&self) -> &'static str {
        error_code::ROUTING_ERROR
    }
}
