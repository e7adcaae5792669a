//! Sequential nonce-search loop
//!
//! The single core loop behind both search modes: encode the counter, digest
//! content plus token, offer the pair to the selector, advance by the stride.
//! Time is checked only at iteration boundaries, so a run may overshoot its
//! budget by at most one digest latency.

use crate::core::digest::Algorithm;
use crate::core::error::{Result, SealError};
use crate::core::nonce::{self, MAX_NONCE};
use crate::mining::selector::Selector;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Default search time budget
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(60_000);

/// Per-iteration progress callback, fed the unit-local visited count
pub type ProgressFn<'a> = &'a (dyn Fn(u64) + Sync);

/// Best candidate found by one search unit
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub digest: String,
    pub token: String,
}

/// Termination policy for one search unit
#[derive(Clone, Debug)]
pub struct SearchPolicy {
    /// Time budget measured from `started`
    pub budget: Duration,
    /// Wall-clock start; shared across units so elapsed time is comparable
    pub started: Instant,
    /// First counter to visit
    pub start: u64,
    /// Counter increment, >1 when units interleave
    pub stride: u64,
    /// Inclusive end of the counter domain
    pub end: u64,
    /// Signature appended to every token
    pub signature: Option<String>,
}

impl SearchPolicy {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: Instant::now(),
            start: 0,
            stride: 1,
            end: MAX_NONCE,
            signature: None,
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

/// Run the search loop over `base` until the policy terminates it.
///
/// `base` must already end in exactly one newline (see
/// [`Content::stamped_base`](crate::core::content::Content::stamped_base)).
/// At least one candidate is always visited. Returns the selector's
/// qualifying result as soon as it is satisfied; otherwise the best candidate
/// at termination, or `ExhaustedSearchSpace` when the selector retained
/// nothing.
pub fn search<S: Selector>(
    base: &[u8],
    algorithm: Algorithm,
    selector: &mut S,
    policy: &SearchPolicy,
    progress: Option<ProgressFn<'_>>,
) -> Result<SearchResult> {
    let mut counter = policy.start;
    let mut visited: u64 = 0;

    if counter > policy.end {
        return Err(SealError::ExhaustedSearchSpace { visited });
    }

    let signature = policy.signature.as_deref();
    let mut hasher = algorithm.hasher();

    loop {
        let token = nonce::encode(counter, signature);

        hasher.update(base);
        hasher.update(token.as_bytes());
        let digest = hex::encode(hasher.finalize_reset());
        visited += 1;

        selector.consider(&digest, &token);
        if let Some(callback) = progress {
            callback(visited);
        }
        if selector.is_satisfied() {
            // Qualifying candidate: first-found wins, stop immediately.
            return Ok(selector
                .best()
                .cloned()
                .expect("satisfied selector retains a result"));
        }

        // Advance, stopping at the domain edge. The overflow-checked add
        // matters when a wide stride jumps past MAX_NONCE.
        match counter.checked_add(policy.stride) {
            Some(next) if next <= policy.end => counter = next,
            _ => break,
        }

        // Boundary-only time check; the loop owns no timer.
        if policy.started.elapsed() > policy.budget {
            break;
        }
    }

    selector
        .best()
        .cloned()
        .ok_or(SealError::ExhaustedSearchSpace { visited })
}
