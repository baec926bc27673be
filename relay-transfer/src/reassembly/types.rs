//! Reassembly types.

use serde::{Deserialize, Serialize};

use relay_core::errors::TransferError;
use relay_core::types::collections::SmallVec4;

use super::checksum::checksum;

/// Placeholder substituted for a fragment that never arrived. The
/// reconstructed data might still be readable around the gap.
pub const MISSING_DATA_PLACEHOLDER: &str = "...";

/// One piece of transferred data with its stored checksum.
///
/// An empty checksum means "unverified" and skips integrity checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub data: String,
    pub checksum: String,
}

impl Fragment {
    /// Fragment with an explicit stored checksum.
    pub fn new(data: impl Into<String>, checksum: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            checksum: checksum.into(),
        }
    }

    /// Fragment whose checksum is computed from its own data.
    pub fn sealed(data: impl Into<String>) -> Self {
        let data = data.into();
        let checksum = checksum(&data);
        Self { data, checksum }
    }

    /// Placeholder for a fragment that never arrived; unverified.
    pub fn placeholder() -> Self {
        Self {
            data: MISSING_DATA_PLACEHOLDER.to_string(),
            checksum: String::new(),
        }
    }
}

/// A fragment as it comes off the wire: the sequence number may be
/// absent (ordering information lost) and the fragment itself may be
/// absent (payload lost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedFragment {
    pub sequence: Option<u64>,
    pub fragment: Option<Fragment>,
}

impl SequencedFragment {
    /// A fragment that arrived intact with its sequence number.
    pub fn new(sequence: u64, fragment: Fragment) -> Self {
        Self {
            sequence: Some(sequence),
            fragment: Some(fragment),
        }
    }

    /// A fragment whose sequence number was lost.
    pub fn unsequenced(fragment: Fragment) -> Self {
        Self {
            sequence: None,
            fragment: Some(fragment),
        }
    }

    /// A sequence slot whose payload was lost.
    pub fn missing(sequence: u64) -> Self {
        Self {
            sequence: Some(sequence),
            fragment: None,
        }
    }
}

/// Outcome of a reconstruction that did not fail integrity checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// Reassembled data, placeholders included.
    pub data: String,
    /// Non-fatal problems encountered along the way.
    pub issues: SmallVec4<TransferError>,
}

impl Reconstruction {
    /// True when every fragment arrived sequenced and intact.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
