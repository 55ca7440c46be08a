//! The result record emitted by a search.

use std::fmt;

use crate::grid::Grid;
use crate::route::Route;

/// A dictionary word together with the route that spells it.
///
/// The same word reached along two different routes yields two distinct
/// `FoundWord`s; nothing downstream of the search deduplicates them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FoundWord {
    /// The word, as the concatenated letters along `route`.
    pub word: String,
    /// The cells that spell `word`, in order.
    pub route: Route,
}

impl FoundWord {
    /// Pair a route with the word it spells on `grid`.
    pub fn from_route(grid: &Grid, route: Route) -> Self {
        Self {
            word: route.word(grid),
            route,
        }
    }
}

impl fmt::Display for FoundWord {
    /// One output line without the trailing newline: `WORD<TAB>route`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.word, self.route)
    }
}
