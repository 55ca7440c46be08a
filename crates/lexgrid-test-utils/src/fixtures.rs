//! Instrumented index fixtures.
//!
//! - [`CountingIndex`] wraps another index and records every query.
//! - [`PanickingIndex`] wraps another index and panics on one chosen query.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use lexgrid_core::PrefixIndex;

/// Counts and records the strings passed to `is_prefix` / `is_word`.
///
/// Used to check that pruned branches are never extended: a pruned
/// prefix is queried once and nothing beginning with it is queried after.
pub struct CountingIndex<P> {
    inner: P,
    prefix_calls: AtomicUsize,
    word_calls: AtomicUsize,
    queried: Mutex<Vec<String>>,
}

impl<P: PrefixIndex> CountingIndex<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            prefix_calls: AtomicUsize::new(0),
            word_calls: AtomicUsize::new(0),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn prefix_calls(&self) -> usize {
        self.prefix_calls.load(Ordering::SeqCst)
    }

    pub fn word_calls(&self) -> usize {
        self.word_calls.load(Ordering::SeqCst)
    }

    /// Every string passed to `is_prefix`, in call order.
    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    /// Distinct strings passed to `is_prefix`.
    pub fn queried_set(&self) -> HashSet<String> {
        self.queried().into_iter().collect()
    }
}

impl<P: PrefixIndex> PrefixIndex for CountingIndex<P> {
    fn is_prefix(&self, s: &str) -> bool {
        self.prefix_calls.fetch_add(1, Ordering::SeqCst);
        self.queried.lock().unwrap().push(s.to_owned());
        self.inner.is_prefix(s)
    }

    fn is_word(&self, s: &str) -> bool {
        self.word_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.is_word(s)
    }
}

/// Panics when `is_prefix` is asked about one specific string.
///
/// Simulates a step failure in the middle of a search.
pub struct PanickingIndex<P> {
    inner: P,
    trigger: String,
    hits: AtomicUsize,
}

impl<P: PrefixIndex> PanickingIndex<P> {
    pub fn new(inner: P, trigger: impl Into<String>) -> Self {
        Self {
            inner,
            trigger: trigger.into(),
            hits: AtomicUsize::new(0),
        }
    }

    /// How many times the trigger string was queried (and panicked).
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl<P: PrefixIndex> PrefixIndex for PanickingIndex<P> {
    fn is_prefix(&self, s: &str) -> bool {
        if s == self.trigger {
            self.hits.fetch_add(1, Ordering::SeqCst);
            panic!("injected index failure on {s:?}");
        }
        self.inner.is_prefix(s)
    }

    fn is_word(&self, s: &str) -> bool {
        self.inner.is_word(s)
    }
}
