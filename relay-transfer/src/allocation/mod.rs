//! Risk-bounded fragment allocation.
//!
//! Placing `k` fragments into a center with risk base `r` exposes them
//! to a compounded risk of `r^k`. The allocator finds the minimal
//! worst-case risk under which all fragments fit.

use tracing::debug;

use relay_core::errors::AllocationError;

/// Minimal achievable worst-case risk when distributing `fragments`
/// across the given centers.
///
/// Returns `Ok(0)` for no centers or no fragments. The search space is
/// bounded by `riskiest^fragments`; if that bound overflows u64 the
/// allocation is rejected with [`AllocationError::RiskOverflow`].
pub fn distribute_fragments(centers: &[u64], fragments: u64) -> Result<u64, AllocationError> {
    if centers.is_empty() || fragments == 0 {
        return Ok(0);
    }

    let mut risks = centers.to_vec();
    risks.sort_unstable();
    let riskiest = risks[risks.len() - 1];

    let mut min_risk: u64 = 1;
    let mut max_risk = risk_bound(riskiest, fragments)?;

    // Binary search for the lowest achievable worst-case risk.
    while min_risk < max_risk {
        let candidate = min_risk + (max_risk - min_risk) / 2;
        if risk_achievable(candidate, &risks, fragments) {
            max_risk = candidate;
        } else {
            min_risk = candidate + 1;
        }
    }

    debug!(fragments, centers = risks.len(), risk = min_risk, "fragments allocated");
    Ok(min_risk)
}

/// Whether every fragment fits somewhere without any center exceeding
/// `limit`.
///
/// A center with risk base `r` holds `k` fragments as long as
/// `r^(k+1) <= limit`, capped at the remaining fragment count. The cap
/// also keeps the count finite for degenerate bases (`r <= 1`), whose
/// powers never grow.
fn risk_achievable(limit: u64, risks: &[u64], fragments: u64) -> bool {
    let mut remaining = fragments;

    for &risk in risks {
        let mut count: u64 = 0;
        let mut power = risk; // risk^(count+1)

        while count < remaining && power <= limit {
            count += 1;
            match power.checked_mul(risk) {
                Some(next) => power = next,
                // The next power exceeds u64, so it exceeds `limit` too.
                None => break,
            }
        }

        remaining -= count;
        if remaining == 0 {
            return true;
        }
    }

    false
}

/// `base^exponent` with overflow detection.
fn risk_bound(base: u64, exponent: u64) -> Result<u64, AllocationError> {
    if exponent == 0 {
        return Ok(1);
    }
    // Powers of 0 and 1 never grow; everything else overflows within
    // 64 steps, so the loop below is bounded.
    if base <= 1 {
        return Ok(base);
    }
    let mut result: u64 = 1;
    for _ in 0..exponent {
        result = result
            .checked_mul(base)
            .ok_or(AllocationError::RiskOverflow { base, exponent })?;
    }
    Ok(result)
}
