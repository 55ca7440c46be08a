//! Search counters shared by all workers.
//!
//! [`SearchMetrics`] is updated lock-free from every worker;
//! [`MetricsSnapshot`] is the plain copy taken when a run finishes.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::step::StepOutcome;

/// Live counters for one search run.
#[derive(Debug, Default)]
pub struct SearchMetrics {
    routes_pushed: AtomicU64,
    routes_expanded: AtomicU64,
    routes_pruned: AtomicU64,
    routes_failed: AtomicU64,
    words_found: AtomicU64,
}

impl SearchMetrics {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count routes placed on the frontier (seeds and children).
    pub fn record_pushed(&self, n: u64) {
        self.routes_pushed.fetch_add(n, Ordering::Relaxed);
    }

    /// Count the outcome of one completed step.
    pub fn record(&self, outcome: &StepOutcome) {
        match *outcome {
            StepOutcome::Pruned => {
                self.routes_pruned.fetch_add(1, Ordering::Relaxed);
            }
            StepOutcome::Expanded { children, emitted } => {
                self.routes_expanded.fetch_add(1, Ordering::Relaxed);
                self.routes_pushed
                    .fetch_add(children as u64, Ordering::Relaxed);
                if emitted {
                    self.words_found.fetch_add(1, Ordering::Relaxed);
                }
            }
        }
    }

    /// Count a step that failed and whose branch was abandoned.
    pub fn record_failure(&self) {
        self.routes_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the current values.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            routes_pushed: self.routes_pushed.load(Ordering::Relaxed),
            routes_expanded: self.routes_expanded.load(Ordering::Relaxed),
            routes_pruned: self.routes_pruned.load(Ordering::Relaxed),
            routes_failed: self.routes_failed.load(Ordering::Relaxed),
            words_found: self.words_found.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`SearchMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Routes placed on the frontier, seeds included.
    pub routes_pushed: u64,
    /// Routes whose word was a valid prefix (expanded, possibly to zero
    /// children at a dead end).
    pub routes_expanded: u64,
    /// Routes abandoned because their word prefixes no dictionary word.
    pub routes_pruned: u64,
    /// Routes whose step failed; each is abandoned like a pruned branch.
    pub routes_failed: u64,
    /// Words emitted to the sink.
    pub words_found: u64,
}

impl MetricsSnapshot {
    /// Routes that completed a step, whatever the outcome.
    pub fn routes_processed(&self) -> u64 {
        self.routes_expanded + self.routes_pruned + self.routes_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SearchMetrics::new().snapshot();
        assert_eq!(m, MetricsSnapshot::default());
        assert_eq!(m.routes_processed(), 0);
    }

    #[test]
    fn record_tallies_outcomes() {
        let m = SearchMetrics::new();
        m.record_pushed(4);
        m.record(&StepOutcome::Pruned);
        m.record(&StepOutcome::Expanded {
            children: 3,
            emitted: true,
        });
        m.record(&StepOutcome::Expanded {
            children: 0,
            emitted: false,
        });
        m.record_failure();

        let s = m.snapshot();
        assert_eq!(s.routes_pushed, 7);
        assert_eq!(s.routes_pruned, 1);
        assert_eq!(s.routes_expanded, 2);
        assert_eq!(s.routes_failed, 1);
        assert_eq!(s.words_found, 1);
        assert_eq!(s.routes_processed(), 4);
    }
}
