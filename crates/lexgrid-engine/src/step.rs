//! The per-route expansion algorithm and the context workers share.

use std::sync::Arc;

use lexgrid_core::PrefixIndex;
use lexgrid_grid::{FoundWord, Grid, Route};

use crate::frontier::Frontier;
use crate::metrics::SearchMetrics;
use crate::sink::WordSink;

/// What one step did with its route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The route's word prefixes no dictionary word; nothing was pushed
    /// or emitted.
    Pruned,
    /// The route's word is a valid prefix.
    Expanded {
        /// Extended routes pushed (zero at a dead end).
        children: usize,
        /// Whether the word was emitted as found.
        emitted: bool,
    },
}

/// Expand one route.
///
/// 1. Derive the word spelled by `route`.
/// 2. If it prefixes no dictionary word, stop: the branch is pruned.
/// 3. If it is a dictionary word at least `min_word_len` letters long,
///    hand a [`FoundWord`] to `emit`. Expansion continues either way,
///    since a word may prefix a longer one.
/// 4. Hand `route + neighbour` to `push` for every neighbour of the last
///    cell that the route does not already visit.
///
/// Pure apart from the two callbacks, which keeps it testable without a
/// frontier or threads.
pub fn expand<P, E>(
    grid: &Grid,
    index: &dyn PrefixIndex,
    min_word_len: usize,
    route: Route,
    mut push: P,
    emit: E,
) -> StepOutcome
where
    P: FnMut(Route),
    E: FnOnce(FoundWord),
{
    let word = route.word(grid);
    if !index.is_prefix(&word) {
        return StepOutcome::Pruned;
    }

    let emitted = route.len() >= min_word_len && index.is_word(&word);
    if emitted {
        // Emit before any child is pushed: a step that unwinds inside
        // `emit` leaves nothing of its subtree on the frontier.
        emit(FoundWord {
            word,
            route: route.clone(),
        });
    }

    let mut children = 0;
    for next in grid.neighbours(route.last()) {
        if !route.contains(next) {
            push(route.extended(next));
            children += 1;
        }
    }
    StepOutcome::Expanded { children, emitted }
}

/// Everything a worker needs, built once per run and shared by `Arc`.
///
/// Grid and index are immutable; the frontier is the only shared mutable
/// state, and the sink and metrics synchronize internally.
pub struct SearchContext {
    grid: Arc<Grid>,
    index: Arc<dyn PrefixIndex>,
    sink: Arc<dyn WordSink>,
    frontier: Frontier,
    metrics: SearchMetrics,
    min_word_len: usize,
}

impl SearchContext {
    /// Assemble a context with an empty frontier and zeroed metrics.
    pub fn new(
        grid: Arc<Grid>,
        index: Arc<dyn PrefixIndex>,
        sink: Arc<dyn WordSink>,
        min_word_len: usize,
    ) -> Self {
        Self {
            grid,
            index,
            sink,
            frontier: Frontier::new(),
            metrics: SearchMetrics::new(),
            min_word_len,
        }
    }

    /// The grid being searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The shared work queue.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Live counters for this run.
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Push one singleton route per grid cell. Returns how many.
    pub fn seed(&self) -> usize {
        let mut seeded = 0;
        for pos in self.grid.positions() {
            self.frontier.push(Route::singleton(pos));
            seeded += 1;
        }
        self.metrics.record_pushed(seeded as u64);
        seeded
    }

    /// Run [`expand`] for `route` against this context's frontier and
    /// sink, recording the outcome.
    ///
    /// Does not acknowledge the route: the caller does that once this
    /// returns (or unwinds).
    pub fn step(&self, route: Route) -> StepOutcome {
        let outcome = expand(
            &self.grid,
            self.index.as_ref(),
            self.min_word_len,
            route,
            |child| self.frontier.push(child),
            |found| self.sink.emit(found),
        );
        self.metrics.record(&outcome);
        outcome
    }
}
