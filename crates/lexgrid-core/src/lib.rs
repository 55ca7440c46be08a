//! Core types and traits for the lexgrid word-grid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the lexgrid workspace:
//! grid positions, the [`PrefixIndex`] capability consumed by the search
//! engine, and the error types for grid and route validation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pos;
pub mod traits;

pub use error::{GridError, RouteError};
pub use pos::Pos;
pub use traits::PrefixIndex;
