//! Fragment transfer and reassembly errors.

use super::error_code::{self, RelayErrorCode};

/// Errors raised while reassembling sequenced fragments.
///
/// Only `IntegrityVerification` aborts a reconstruction; the other
/// variants are accumulated as non-fatal issues on the result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("data integrity verification failed")]
    IntegrityVerification,

    #[error("missing fragment of the sequence: {sequence}")]
    MissingFragment { sequence: u64 },

    #[error("sequence order is broken")]
    BrokenOrder,
}

impl RelayErrorCode for TransferError {
    fn error_code(&self) -> &'static str {
        error_code::TRANSFER_ERROR
    }
}
