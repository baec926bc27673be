//! RelayErrorCode trait for structured error codes.

/// Trait for attaching a stable code string to Relay errors.
/// Every error enum implements this so logs and reports can carry
/// a machine-matchable code alongside the human-readable message.
pub trait RelayErrorCode {
    /// Returns the error code string (e.g., "ROUTING_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const ROUTING_ERROR: &str = "ROUTING_ERROR";
pub const ALLOCATION_ERROR: &str = "ALLOCATION_ERROR";
pub const TRANSFER_ERROR: &str = "TRANSFER_ERROR";
