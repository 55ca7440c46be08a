//! Parallel prefix-pruned path search for lexgrid.
//!
//! The engine finds every dictionary word that can be traced along a
//! cycle-free path of adjacent grid cells. Work is an explicit, growing
//! [`Frontier`] of partial routes rather than call-stack recursion, so it
//! spreads across a pool of worker threads.
//!
//! # Architecture
//!
//! ```text
//! Coordinator (Solver::run)         Frontier                Workers (N)
//!     |                                |                        |
//!     |--push(singleton) x N²--------->| outstanding += 1       |
//!     |--spawn N workers------------------------------------->  |
//!     |                                |<--------pop()----------|
//!     |                                |                step(route):
//!     |                                |                  prune / emit
//!     |                                |<--push(child)----------| outstanding += 1
//!     |                                |<--acknowledge()--------| outstanding -= 1
//!     |--await_idle()----------------->| blocks until 0         |
//!     |--push_shutdown() x N---------->|                        |
//!     |                                |<--------pop()----------| token: ack + exit
//!     |--join workers------------------------------------------>|
//! ```
//!
//! A popped item is acknowledged only after its step, including every
//! push it makes, has finished. The outstanding count therefore cannot
//! reach zero while any branch can still produce work, which makes
//! [`Frontier::await_idle`] the completion signal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod frontier;
pub mod metrics;
pub mod sink;
pub mod solver;
pub mod step;
mod worker;

pub use config::{ConfigError, SearchConfig};
pub use frontier::{Ack, Frontier, FrontierItem};
pub use metrics::{MetricsSnapshot, SearchMetrics};
pub use sink::{ChannelSink, FnSink, VecSink, WordSink, WriterSink};
pub use solver::{solve, SearchError, SearchReport, Solver, SolverState};
pub use step::{expand, SearchContext, StepOutcome};
