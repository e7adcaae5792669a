//! Multi-worker search coordination
//!
//! Partitions the counter space into interleaved strides: unit `i` starts at
//! counter `i` and advances by the worker count, so the union of visited
//! counters is a contiguous, gap-free prefix of the domain. Units run
//! independently and report over a channel; dropping the coordinator's sender
//! clone turns channel closure into the all-units-done barrier, so the merged
//! result is finalized exactly once even under simultaneous completions.

use crate::core::digest::Algorithm;
use crate::core::error::{Result, SealError};
use crate::core::nonce::MAX_NONCE;
use crate::mining::search::{search, ProgressFn, SearchPolicy, SearchResult, DEFAULT_BUDGET};
use crate::mining::selector::BestEffort;
use std::thread;
use std::time::Duration;

/// Options for a coordinated best-effort search
#[derive(Clone, Debug)]
pub struct MineOptions {
    /// Worker count; 0 means one per available logical processor
    pub workers: usize,
    /// Time budget shared by every unit
    pub budget: Duration,
    /// Signature appended to every token
    pub signature: Option<String>,
    /// Inclusive end of the counter domain
    pub end: u64,
}

impl Default for MineOptions {
    fn default() -> Self {
        Self {
            workers: 0,
            budget: DEFAULT_BUDGET,
            signature: None,
            end: MAX_NONCE,
        }
    }
}

impl MineOptions {
    /// Resolved worker count, at least one
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }
}

/// Run a best-effort search across worker threads and return the global
/// optimum under lexicographic digest order, token as tiebreaker.
///
/// A failing unit is logged and dropped, not retried; the call fails with
/// `NoResults` only when no unit survives.
pub fn mine(
    base: &[u8],
    algorithm: Algorithm,
    options: &MineOptions,
    progress: Option<ProgressFn<'_>>,
) -> Result<SearchResult> {
    let workers = options.effective_workers();

    // One policy template, its wall-clock start issued here so every unit
    // measures elapsed time from the same instant regardless of spawn lag.
    let mut template = SearchPolicy::new(options.budget);
    template.end = options.end;
    template.signature = options.signature.clone();

    let (sender, receiver) = crossbeam_channel::unbounded::<(usize, Result<SearchResult>)>();

    thread::scope(|scope| {
        for unit in 0..workers {
            let sender = sender.clone();
            let mut policy = template.clone();
            policy.start = unit as u64;
            policy.stride = workers as u64;

            scope.spawn(move || {
                let mut selector = BestEffort::default();
                let outcome = search(base, algorithm, &mut selector, &policy, progress);
                // The coordinator outlives the scope; a send can only fail if
                // it already gave up, in which case the result is moot.
                let _ = sender.send((unit, outcome));
            });
        }
        // Receiver iteration ends once every unit's sender clone is gone;
        // normal return and panic both release it.
        drop(sender);

        let mut best: Option<SearchResult> = None;
        for (unit, outcome) in receiver {
            match outcome {
                Ok(result) => {
                    tracing::debug!(unit, digest = %result.digest, "search unit finished");
                    let improves = match &best {
                        Some(current) => {
                            (result.digest.as_str(), result.token.as_str())
                                < (current.digest.as_str(), current.token.as_str())
                        },
                        None => true,
                    };
                    if improves {
                        best = Some(result);
                    }
                },
                Err(err) => {
                    tracing::warn!(unit, error = %err, "search unit failed");
                },
            }
        }

        best.ok_or(SealError::NoResults)
    })
}
