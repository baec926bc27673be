//! Core types, errors, and tracing for the Relay algorithm workspace.

pub mod errors;
pub mod tracing;
pub mod types;

pub use errors::{AllocationError, RoutingError, TransferError};
