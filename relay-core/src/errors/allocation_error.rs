//! Fragment allocation errors.

use super::error_code::{self, RelayErrorCode};

/// Errors that can occur during fragment distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("risk bound overflow: {base}^{exponent} exceeds the u64 range")]
    RiskOverflow { base: u64, exponent: u64 },
}

impl RelayErrorCode for AllocationError {
    fn error_code(&self) -> &'static str {
        error_code::ALLOCATION_ERROR
    }
}
