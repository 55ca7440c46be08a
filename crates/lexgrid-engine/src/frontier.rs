//! The shared work queue with outstanding-work tracking.
//!
//! [`Frontier`] pairs an unbounded crossbeam channel of pending items
//! with a count of items pushed but not yet acknowledged. The count is
//! incremented *before* an item becomes visible to consumers and
//! decremented only when its consumer acknowledges it, so
//!
//! ```text
//! outstanding == pushed - acknowledged >= 0
//! ```
//!
//! holds at every instant, and zero means nothing is queued or in flight
//! anywhere. Checking the queue for emptiness would not do: a worker
//! midway through a step has an empty queue in front of it but may be
//! about to push more work.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::{Receiver, Sender};
use lexgrid_grid::Route;

/// An item pulled from the frontier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrontierItem {
    /// A route pending expansion.
    Route(Route),
    /// Tells the worker that pops it to acknowledge it and exit.
    Shutdown,
}

/// Concurrent multiset of pending routes with an "all work done" signal.
///
/// Consumers must not rely on FIFO order; the channel happens to be FIFO
/// but correctness only depends on the outstanding count.
pub struct Frontier {
    tx: Sender<FrontierItem>,
    rx: Receiver<FrontierItem>,
    outstanding: Mutex<usize>,
    idle: Condvar,
}

// Compile-time assertion: Frontier must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Frontier>();
};

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    /// Create an empty frontier with zero outstanding work.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            tx,
            rx,
            outstanding: Mutex::new(0),
            idle: Condvar::new(),
        }
    }

    /// Enqueue a route. Never blocks.
    pub fn push(&self, route: Route) {
        self.enqueue(FrontierItem::Route(route));
    }

    /// Enqueue one shutdown token. Counted like any other item, so it
    /// must be acknowledged by the worker that pops it.
    pub fn push_shutdown(&self) {
        self.enqueue(FrontierItem::Shutdown);
    }

    fn enqueue(&self, item: FrontierItem) {
        *self.count() += 1;
        // The frontier owns the receiver, so the channel cannot be
        // disconnected while `self` is alive.
        let _ = self.tx.send(item);
    }

    /// Block until an item is available and return it.
    ///
    /// The item stays outstanding until [`acknowledge`](Self::acknowledge)
    /// is called for it.
    pub fn pop(&self) -> FrontierItem {
        self.rx.recv().unwrap_or(FrontierItem::Shutdown)
    }

    /// Pop an item together with a guard that acknowledges it on drop.
    ///
    /// Holding the guard across the item's processing guarantees exactly
    /// one acknowledgement per item, including when processing unwinds.
    pub fn pop_guarded(&self) -> (FrontierItem, Ack<'_>) {
        let item = self.pop();
        (item, Ack { frontier: self })
    }

    /// Mark one previously popped item as fully processed.
    ///
    /// Wakes every [`await_idle`](Self::await_idle) caller when the
    /// outstanding count reaches zero. Acknowledging more items than were
    /// pushed is a protocol violation; debug builds assert, release
    /// builds leave the count at zero.
    pub fn acknowledge(&self) {
        let mut count = self.count();
        debug_assert!(*count > 0, "acknowledge() without outstanding work");
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.idle.notify_all();
        }
    }

    /// Block until the outstanding count is zero.
    pub fn await_idle(&self) {
        let count = self.count();
        let _idle = self
            .idle
            .wait_while(count, |n| *n > 0)
            .unwrap_or_else(PoisonError::into_inner);
    }

    #[cfg(test)]
    fn await_idle_timeout(&self, timeout: std::time::Duration) -> bool {
        let count = self.count();
        let (_count, result) = self
            .idle
            .wait_timeout_while(count, timeout, |n| *n > 0)
            .unwrap_or_else(PoisonError::into_inner);
        !result.timed_out()
    }

    /// Items pushed but not yet acknowledged.
    pub fn outstanding(&self) -> usize {
        *self.count()
    }

    #[cfg(test)]
    fn queued(&self) -> usize {
        self.rx.len()
    }

    fn count(&self) -> MutexGuard<'_, usize> {
        // The counter is a plain integer; a panic elsewhere while holding
        // the lock cannot leave it half-updated.
        self.outstanding
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Acknowledges one popped item when dropped.
#[must_use = "dropping the guard acknowledges the item immediately"]
pub struct Ack<'a> {
    frontier: &'a Frontier,
}

impl Drop for Ack<'_> {
    fn drop(&mut self) {
        self.frontier.acknowledge();
    }
}
