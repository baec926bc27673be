//! Checksum-verified fragment reassembly.
//!
//! Fragments arrive in arbitrary order, possibly with lost sequence
//! numbers or lost payloads. Reconstruction restores sequence order,
//! substitutes placeholders for lost payloads, and accumulates the
//! non-fatal problems on the result. A checksum mismatch is the one
//! fatal condition: it means the data itself cannot be trusted.

pub mod checksum;
pub mod types;

use tracing::warn;

use relay_core::errors::TransferError;
use relay_core::types::collections::SmallVec4;

pub use checksum::{checksum, CHECKSUM_LENGTH};
pub use types::{Fragment, Reconstruction, SequencedFragment, MISSING_DATA_PLACEHOLDER};

/// Reassemble fragments into their original data.
///
/// Ordering rules:
/// - sequenced fragments sort by sequence number, stably, so collisions
///   keep their arrival order;
/// - a fragment without a sequence number inherits the position of the
///   previously accepted entry (before everything when it arrives
///   first) and raises a [`TransferError::BrokenOrder`] issue;
/// - a lost payload becomes [`MISSING_DATA_PLACEHOLDER`] and raises a
///   [`TransferError::MissingFragment`] issue. Gaps in the numbering
///   alone are not reported; only an explicitly missing payload is.
///
/// Unsequenced fragments skip checksum verification.
pub fn reconstruct(fragments: &[SequencedFragment]) -> Result<Reconstruction, TransferError> {
    let mut issues: SmallVec4<TransferError> = SmallVec4::new();
    let mut accepted: Vec<(i64, String)> = Vec::with_capacity(fragments.len());

    for entry in fragments {
        let Some(sequence) = entry.sequence else {
            issues.push(TransferError::BrokenOrder);
            // Inherit the position of the previous accepted entry;
            // -1 sorts an orphaned head fragment before sequence 0.
            let position = accepted.len() as i64 - 1;
            let data = entry
                .fragment
                .as_ref()
                .map(|f| f.data.clone())
                .unwrap_or_default();
            accepted.push((position, data));
            continue;
        };

        let Some(fragment) = &entry.fragment else {
            issues.push(TransferError::MissingFragment { sequence });
            accepted.push((sequence as i64, MISSING_DATA_PLACEHOLDER.to_string()));
            continue;
        };

        verify_checksum(fragment)?;
        accepted.push((sequence as i64, fragment.data.clone()));
    }

    if !issues.is_empty() {
        warn!(issues = issues.len(), "reconstruction degraded");
    }

    accepted.sort_by_key(|&(position, _)| position);

    let data = accepted
        .into_iter()
        .map(|(_, data)| data)
        .collect::<String>();

    Ok(Reconstruction { data, issues })
}

/// Compare a fragment's stored checksum against its data. An empty
/// stored checksum means unverified and always passes.
fn verify_checksum(fragment: &Fragment) -> Result<(), TransferError> {
    if fragment.checksum.is_empty() {
        return Ok(());
    }
    if checksum(&fragment.data) != fragment.checksum {
        return Err(TransferError::IntegrityVerification);
    }
    Ok(())
}
