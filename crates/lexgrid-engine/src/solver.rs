//! The coordinator: seeds the frontier, runs the worker pool, and shuts
//! it down once every branch has been explored.

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use lexgrid_core::PrefixIndex;
use lexgrid_grid::{FoundWord, Grid};

use crate::config::{ConfigError, SearchConfig};
use crate::metrics::MetricsSnapshot;
use crate::sink::{VecSink, WordSink};
use crate::step::SearchContext;
use crate::worker::{self, WorkerReport};

// ── Error types ──────────────────────────────────────────────────

/// Errors from constructing or running a [`Solver`].
#[derive(Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Not a single worker thread could be spawned.
    NoWorkers,
    /// A worker thread panicked outside a search step.
    WorkerPanicked {
        /// Index of the first worker that failed to join cleanly.
        worker: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid search config: {e}"),
            Self::NoWorkers => write!(f, "no worker thread could be spawned"),
            Self::WorkerPanicked { worker } => {
                write!(f, "worker {worker} panicked")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── SearchReport ─────────────────────────────────────────────────

/// Summary of one completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Worker threads spawned.
    pub workers: usize,
    /// Worker threads joined without panicking.
    pub workers_joined: usize,
    /// Singleton routes seeded (one per grid cell).
    pub seeded: usize,
    /// Counters accumulated during the run.
    pub metrics: MetricsSnapshot,
    /// Wall-clock time from seeding to the last join.
    pub elapsed_ms: u64,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;
        write!(
            f,
            "{} words found in {} ms ({} workers, {} routes expanded, {} pruned, {} failed)",
            m.words_found,
            self.elapsed_ms,
            self.workers,
            m.routes_expanded,
            m.routes_pruned,
            m.routes_failed,
        )
    }
}

// ── SolverState ──────────────────────────────────────────────────

/// Coordinator lifecycle.
///
/// ```text
/// Ready ──run()──> Seeding ──> Running ──> Draining ──> Terminated
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    /// Constructed, not yet run.
    Ready,
    /// Pushing one singleton route per cell.
    Seeding,
    /// Workers are consuming the frontier.
    Running,
    /// Frontier idle; shutdown tokens sent.
    Draining,
    /// Every worker has been joined.
    Terminated,
}

// ── Solver ───────────────────────────────────────────────────────

/// Finds every dictionary word traceable on a grid, in parallel.
///
/// ```no_run
/// use std::sync::Arc;
/// use lexgrid_engine::{SearchConfig, Solver, WriterSink};
/// # fn demo(grid: lexgrid_grid::Grid, index: Arc<dyn lexgrid_core::PrefixIndex>) {
/// let mut solver = Solver::new(grid, index, SearchConfig::default()).unwrap();
/// let report = solver.run(Arc::new(WriterSink::stdout())).unwrap();
/// eprintln!("{report}");
/// # }
/// ```
pub struct Solver {
    grid: Arc<Grid>,
    index: Arc<dyn PrefixIndex>,
    config: SearchConfig,
    state: SolverState,
}

impl Solver {
    /// Validate `config` and prepare a solver. No threads are started
    /// until [`run`](Self::run).
    pub fn new(
        grid: impl Into<Arc<Grid>>,
        index: Arc<dyn PrefixIndex>,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            grid: grid.into(),
            index,
            config,
            state: SolverState::Ready,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// The grid this solver searches.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Search the whole grid, handing every found word to `sink` as soon
    /// as it is found. Blocks until the search is complete and every
    /// worker has exited.
    ///
    /// A solver may be run more than once; each run starts from a fresh
    /// frontier and fresh metrics.
    pub fn run(&mut self, sink: Arc<dyn WordSink>) -> Result<SearchReport, SearchError> {
        let start = Instant::now();
        let ctx = Arc::new(SearchContext::new(
            Arc::clone(&self.grid),
            Arc::clone(&self.index),
            sink,
            self.config.min_word_len,
        ));

        // Seeding happens before any worker exists, so the outstanding
        // count is already N² when the first pop can happen.
        self.transition(SolverState::Seeding);
        let seeded = ctx.seed();

        self.transition(SolverState::Running);
        let requested = self.config.resolved_worker_count();
        let handles = spawn_workers(&ctx, requested);
        if handles.is_empty() {
            self.transition(SolverState::Terminated);
            return Err(SearchError::NoWorkers);
        }
        let workers = handles.len();
        tracing::debug!(workers, seeded, "search running");

        ctx.frontier().await_idle();

        self.transition(SolverState::Draining);
        for _ in 0..workers {
            ctx.frontier().push_shutdown();
        }

        let mut workers_joined = 0;
        let mut first_panicked = None;
        for (i, handle) in handles {
            match handle.join() {
                Ok(WorkerReport { steps, failures }) => {
                    workers_joined += 1;
                    tracing::debug!(worker = i, steps, failures, "worker joined");
                }
                Err(_) => {
                    tracing::warn!(worker = i, "worker thread panicked");
                    first_panicked.get_or_insert(i);
                }
            }
        }
        self.transition(SolverState::Terminated);

        if let Some(worker) = first_panicked {
            return Err(SearchError::WorkerPanicked { worker });
        }

        let report = SearchReport {
            workers,
            workers_joined,
            seeded,
            metrics: ctx.metrics().snapshot(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        tracing::info!(
            words = report.metrics.words_found,
            expanded = report.metrics.routes_expanded,
            pruned = report.metrics.routes_pruned,
            failed = report.metrics.routes_failed,
            elapsed_ms = report.elapsed_ms,
            "search complete"
        );
        Ok(report)
    }

    fn transition(&mut self, next: SolverState) {
        tracing::debug!(from = ?self.state, to = ?next, "solver state");
        self.state = next;
    }
}

/// Spawn up to `count` workers. Spawn failures are logged and skipped;
/// the caller decides what to do with fewer workers than requested.
fn spawn_workers(
    ctx: &Arc<SearchContext>,
    count: usize,
) -> Vec<(usize, JoinHandle<WorkerReport>)> {
    let mut handles = Vec::with_capacity(count);
    for i in 0..count {
        let ctx = Arc::clone(ctx);
        let spawned = thread::Builder::new()
            .name(format!("lexgrid-worker-{i}"))
            .spawn(move || worker::worker_loop(ctx, i));
        match spawned {
            Ok(handle) => handles.push((i, handle)),
            Err(e) => tracing::warn!(worker = i, error = %e, "failed to spawn worker"),
        }
    }
    handles
}

/// Run a search and collect every found word.
///
/// Convenience over [`Solver`] with a [`VecSink`]. Order of the returned
/// words is unspecified.
pub fn solve(
    grid: impl Into<Arc<Grid>>,
    index: Arc<dyn PrefixIndex>,
    config: SearchConfig,
) -> Result<Vec<FoundWord>, SearchError> {
    let sink = Arc::new(VecSink::new());
    let mut solver = Solver::new(grid, index, config)?;
    solver.run(Arc::clone(&sink) as Arc<dyn WordSink>)?;
    Ok(sink.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nothing;

    impl PrefixIndex for Nothing {
        fn is_prefix(&self, _: &str) -> bool {
            false
        }

        fn is_word(&self, _: &str) -> bool {
            false
        }
    }

    fn grid() -> Grid {
        Grid::parse("CA/TS").unwrap()
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let cfg = SearchConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        let err = Solver::new(grid(), Arc::new(Nothing), cfg).err();
        assert_eq!(err, Some(SearchError::Config(ConfigError::ZeroWorkers)));
    }

    #[test]
    fn state_machine_reaches_terminated() {
        let mut solver = Solver::new(grid(), Arc::new(Nothing), SearchConfig::default()).unwrap();
        assert_eq!(solver.state(), SolverState::Ready);
        let report = solver.run(Arc::new(VecSink::new())).unwrap();
        assert_eq!(solver.state(), SolverState::Terminated);
        assert_eq!(report.seeded, 4);
        assert_eq!(report.workers, report.workers_joined);
        assert_eq!(report.metrics.routes_pruned, 4);
        assert_eq!(report.metrics.words_found, 0);
    }

    #[test]
    fn solver_can_run_twice() {
        let cfg = SearchConfig {
            worker_count: Some(2),
            ..Default::default()
        };
        let mut solver = Solver::new(grid(), Arc::new(Nothing), cfg).unwrap();
        let a = solver.run(Arc::new(VecSink::new())).unwrap();
        let b = solver.run(Arc::new(VecSink::new())).unwrap();
        assert_eq!(a.metrics.routes_processed(), b.metrics.routes_processed());
        assert_eq!(b.workers, 2);
    }

    #[test]
    fn search_error_display_and_source() {
        let e = SearchError::from(ConfigError::ZeroMinWordLen);
        assert!(e.to_string().contains("min_word_len"));
        assert!(e.source().is_some());
        assert!(SearchError::NoWorkers.source().is_none());
        assert_eq!(
            SearchError::WorkerPanicked { worker: 2 }.to_string(),
            "worker 2 panicked"
        );
    }

    #[test]
    fn report_display_summarizes() {
        let report = SearchReport {
            workers: 4,
            workers_joined: 4,
            seeded: 16,
            metrics: MetricsSnapshot {
                words_found: 3,
                routes_expanded: 10,
                routes_pruned: 20,
                ..Default::default()
            },
            elapsed_ms: 5,
        };
        assert_eq!(
            report.to_string(),
            "3 words found in 5 ms (4 workers, 10 routes expanded, 20 pruned, 0 failed)"
        );
    }
}
