//! Cycle-free paths of adjacent cells.

use std::fmt;

use lexgrid_core::{Pos, RouteError};
use smallvec::{smallvec, SmallVec};

use crate::grid::Grid;

/// An ordered, non-empty sequence of distinct, pairwise-adjacent cells.
///
/// Routes are built from a singleton and grown one neighbour at a time by
/// [`extended`](Route::extended); the search never extends a route onto a
/// cell it already visits, so a route is never self-intersecting and its
/// length never exceeds the grid's cell count.
///
/// The inline capacity covers every route on a classic 4×4 board without
/// a heap allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    cells: SmallVec<[Pos; 16]>,
}

impl Route {
    /// A one-cell route starting (and ending) at `pos`.
    pub fn singleton(pos: Pos) -> Self {
        Self {
            cells: smallvec![pos],
        }
    }

    /// Build a route from explicit positions, checking every invariant
    /// against `grid`.
    pub fn from_cells<I>(grid: &Grid, cells: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = Pos>,
    {
        let route = Self {
            cells: cells.into_iter().collect(),
        };
        route.validate(grid)?;
        Ok(route)
    }

    /// A new route equal to `self` followed by `next`.
    ///
    /// The caller guarantees `next` is an unvisited neighbour of
    /// [`last`](Self::last); debug builds assert it.
    pub fn extended(&self, next: Pos) -> Self {
        debug_assert!(!self.contains(next), "route revisits {next}");
        debug_assert!(self.last().is_adjacent(&next), "{next} not adjacent");
        let mut cells = SmallVec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(next);
        Self { cells }
    }

    /// The final cell, where the next extension attaches.
    pub fn last(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }

    /// The first cell.
    pub fn first(&self) -> Pos {
        self.cells[0]
    }

    /// Whether the route already visits `pos`.
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of cells visited; equals the length of the route's word.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: a route visits at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The visited cells in order.
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// The letters along the route, concatenated in order.
    pub fn word(&self, grid: &Grid) -> String {
        self.cells.iter().map(|&p| grid.letter(p)).collect()
    }

    /// Check the route's invariants against `grid`: non-empty, in bounds,
    /// no repeated cell, each consecutive pair adjacent.
    pub fn validate(&self, grid: &Grid) -> Result<(), RouteError> {
        if self.cells.is_empty() {
            return Err(RouteError::Empty);
        }
        for (i, &pos) in self.cells.iter().enumerate() {
            if !grid.contains(pos) {
                return Err(RouteError::OutOfBounds {
                    pos,
                    size: grid.size(),
                });
            }
            if self.cells[..i].contains(&pos) {
                return Err(RouteError::Repeated { pos });
            }
            if i > 0 {
                let from = self.cells[i - 1];
                if !from.is_adjacent(&pos) {
                    return Err(RouteError::NotAdjacent { from, to: pos });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Route {
    /// Renders as a bracketed list of `(row, col)` pairs:
    /// `[(0, 0), (0, 1), (1, 0)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pos}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(r: usize, c: usize) -> Pos {
        Pos::new(r, c)
    }

    fn cats() -> Grid {
        Grid::parse("CA/TS").unwrap()
    }

    #[test]
    fn word_follows_route_order() {
        let g = cats();
        let route = Route::from_cells(&g, [p(0, 0), p(0, 1), p(1, 0), p(1, 1)]).unwrap();
        assert_eq!(route.word(&g), "CATS");
        assert_eq!(route.len(), 4);
        assert_eq!(route.first(), p(0, 0));
        assert_eq!(route.last(), p(1, 1));
    }

    #[test]
    fn extended_leaves_source_route_untouched() {
        let base = Route::singleton(p(0, 0));
        let next = base.extended(p(1, 1));
        assert_eq!(base.len(), 1);
        assert_eq!(next.cells(), &[p(0, 0), p(1, 1)]);
        assert!(next.contains(p(1, 1)));
        assert!(!base.contains(p(1, 1)));
    }

    #[test]
    fn display_lists_pairs() {
        let g = cats();
        let route = Route::from_cells(&g, [p(0, 0), p(0, 1), p(1, 0)]).unwrap();
        assert_eq!(route.to_string(), "[(0, 0), (0, 1), (1, 0)]");
        assert_eq!(Route::singleton(p(1, 1)).to_string(), "[(1, 1)]");
    }

    #[test]
    fn from_cells_rejects_repeats() {
        let g = cats();
        assert_eq!(
            Route::from_cells(&g, [p(0, 0), p(0, 1), p(0, 0)]),
            Err(RouteError::Repeated { pos: p(0, 0) })
        );
    }

    #[test]
    fn from_cells_rejects_gaps() {
        let g = Grid::parse("ABC/DEF/GHI").unwrap();
        assert_eq!(
            Route::from_cells(&g, [p(0, 0), p(0, 2)]),
            Err(RouteError::NotAdjacent {
                from: p(0, 0),
                to: p(0, 2)
            })
        );
    }

    #[test]
    fn from_cells_rejects_empty_and_out_of_bounds() {
        let g = cats();
        assert_eq!(Route::from_cells(&g, Vec::<Pos>::new()), Err(RouteError::Empty));
        assert_eq!(
            Route::from_cells(&g, [p(2, 2)]),
            Err(RouteError::OutOfBounds {
                pos: p(2, 2),
                size: 2
            })
        );
    }

    proptest! {
        /// A route grown by always stepping to an unvisited neighbour
        /// stays valid and its word length tracks its cell count.
        #[test]
        fn greedy_walk_stays_valid(
            size in 1usize..7,
            start in 0usize..49,
            picks in proptest::collection::vec(0usize..8, 0..40),
        ) {
            let letters: String = (0..size * size)
                .map(|i| char::from(b'A' + (i % 26) as u8))
                .collect();
            let g = Grid::from_letters(size, &letters).unwrap();
            let start = p((start / size) % size, start % size);
            let mut route = Route::singleton(start);
            for pick in picks {
                let open: Vec<Pos> = g
                    .neighbours(route.last())
                    .into_iter()
                    .filter(|nb| !route.contains(*nb))
                    .collect();
                if open.is_empty() {
                    break;
                }
                route = route.extended(open[pick % open.len()]);
            }
            prop_assert!(route.validate(&g).is_ok());
            prop_assert!(route.len() <= g.cell_count());
            prop_assert_eq!(route.word(&g).chars().count(), route.len());
        }
    }
}
