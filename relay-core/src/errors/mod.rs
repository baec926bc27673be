//! Error taxonomy for Relay.
//!
//! One error enum per subsystem, `thiserror` for Display/Error impls,
//! `RelayErrorCode` for structured code strings in logs and reports.

pub mod allocation_error;
pub mod error_code;
pub mod routing_error;
pub mod transfer_error;

pub use allocation_error::AllocationError;
pub use error_code::RelayErrorCode;
pub use routing_error::RoutingError;
pub use transfer_error::TransferError;
