//! lexgrid: find every dictionary word traceable on a letter grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all lexgrid sub-crates, and ships the `lexgrid` command-line solver.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use lexgrid::prelude::*;
//!
//! let grid = Grid::parse("CA/TS").unwrap();
//! let lexicon = Lexicon::from_words(["cat", "cats", "at"]);
//! let mut found = solve(grid, Arc::new(lexicon), SearchConfig::default()).unwrap();
//! found.sort_by(|a, b| a.word.cmp(&b.word));
//!
//! let words: Vec<&str> = found.iter().map(|f| f.word.as_str()).collect();
//! assert_eq!(words, ["AT", "CAT", "CATS"]);
//! assert_eq!(found[1].to_string(), "CAT\t[(0, 0), (0, 1), (1, 0)]");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lexgrid-core` | `Pos`, the `PrefixIndex` trait, grid and route errors |
//! | [`grid`] | `lexgrid-grid` | `Grid`, `Route`, `FoundWord`, dice boards |
//! | [`dict`] | `lexgrid-dict` | The `Lexicon` trie and word-list loading |
//! | [`engine`] | `lexgrid-engine` | Frontier, workers, `Solver`, sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`lexgrid-core`).
pub use lexgrid_core as types;

/// Grids, routes and board generation (`lexgrid-grid`).
///
/// [`grid::Grid`] is the immutable board; [`grid::roll_board`] rolls a
/// reproducible one from the classic dice.
pub use lexgrid_grid as grid;

/// Dictionaries (`lexgrid-dict`).
pub use lexgrid_dict as dict;

/// The parallel search engine (`lexgrid-engine`).
///
/// [`engine::Solver`] runs a search and streams results into an
/// [`engine::WordSink`]; [`engine::solve`] collects them into a `Vec`.
pub use lexgrid_engine as engine;

/// Common imports for typical lexgrid usage.
///
/// ```rust
/// use lexgrid::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use lexgrid_core::{GridError, Pos, PrefixIndex, RouteError};

    // Grid
    pub use lexgrid_grid::{roll_board, DiceSet, FoundWord, Grid, Route};

    // Dictionary
    pub use lexgrid_dict::{DictError, Lexicon};

    // Engine
    pub use lexgrid_engine::{
        solve, SearchConfig, SearchError, SearchReport, Solver, VecSink, WordSink, WriterSink,
    };
}
