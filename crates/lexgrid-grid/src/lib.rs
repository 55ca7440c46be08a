//! Letter grids and routes for the lexgrid solver.
//!
//! This crate defines the immutable [`Grid`] that a search runs over,
//! its 8-connected adjacency rule, the [`Route`] type that records a
//! cycle-free path of cells, and [`FoundWord`], the result record a
//! search emits.
//!
//! # Adjacency
//!
//! Neighbours are the four cardinal and four diagonal cells that lie
//! inside the grid. There is no wraparound: corners have 3 neighbours,
//! non-corner edge cells 5, interior cells 8, and the sole cell of a
//! 1×1 grid has none.
//!
//! # Boards
//!
//! [`dice`] rolls reproducible boards from a set of letter dice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dice;
pub mod found;
pub mod grid;
pub mod route;

#[cfg(test)]
pub(crate) mod compliance;

pub use dice::{roll_board, DiceSet};
pub use found::FoundWord;
pub use grid::Grid;
pub use route::Route;

pub use lexgrid_core::{GridError, Pos, RouteError};
