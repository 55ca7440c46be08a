//! Search configuration, validation, and error types.

use std::error::Error;
use std::fmt;

/// Upper bound applied to an explicit worker count.
pub const MAX_WORKERS: usize = 256;

// ── SearchConfig ──────────────────────────────────────────────────

/// Configuration for a [`Solver`](crate::solver::Solver) run.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of worker threads. `None` = one per available processing
    /// unit (`available_parallelism`, at least 1).
    pub worker_count: Option<usize>,
    /// Shortest word that is emitted. Shorter words are still expanded,
    /// since they may prefix a longer word. Default: 1.
    pub min_word_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            min_word_len: 1,
        }
    }
}

impl SearchConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.min_word_len == 0 {
            return Err(ConfigError::ZeroMinWordLen);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicit worker count of zero.
    ZeroWorkers,
    /// A minimum word length of zero.
    ZeroMinWordLen,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker_count must be at least 1"),
            Self::ZeroMinWordLen => write!(f, "min_word_len must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
