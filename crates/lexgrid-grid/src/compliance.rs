//! Adjacency compliance test helpers.
//!
//! These functions verify that a grid's neighbour rule satisfies the
//! invariants the search engine relies on. Reused across the grid and
//! route test modules.

use crate::grid::Grid;

/// Assert that no cell is its own neighbour.
pub fn assert_no_self_neighbour(grid: &Grid) {
    for pos in grid.positions() {
        assert!(
            !grid.neighbours(pos).contains(&pos),
            "{pos} listed as its own neighbour"
        );
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for pos in grid.positions() {
        for nb in grid.neighbours(pos) {
            assert!(
                grid.neighbours(nb).contains(&pos),
                "neighbour symmetry violated: {nb} in N({pos}) but {pos} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour lies inside the grid and that no cell
/// lists the same neighbour twice.
pub fn assert_neighbours_in_bounds_and_distinct(grid: &Grid) {
    for pos in grid.positions() {
        let nbs = grid.neighbours(pos);
        for (i, nb) in nbs.iter().enumerate() {
            assert!(grid.contains(*nb), "neighbour {nb} of {pos} out of bounds");
            assert!(
                !nbs[i + 1..].contains(nb),
                "neighbour {nb} of {pos} listed twice"
            );
        }
    }
}

/// Assert corner / edge / interior neighbour counts (3 / 5 / 8), or 0
/// for a single-cell grid.
pub fn assert_neighbour_counts(grid: &Grid) {
    let last = grid.size() - 1;
    for pos in grid.positions() {
        let count = grid.neighbours(pos).len();
        let on_row_edge = pos.row == 0 || pos.row == last;
        let on_col_edge = pos.col == 0 || pos.col == last;
        let expected = if grid.size() == 1 {
            0
        } else if on_row_edge && on_col_edge {
            3
        } else if on_row_edge || on_col_edge {
            5
        } else {
            8
        };
        assert_eq!(
            count, expected,
            "{pos} on {0}x{0} grid has {count} neighbours, expected {expected}",
            grid.size()
        );
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(grid: &Grid) {
    assert_no_self_neighbour(grid);
    assert_neighbours_symmetric(grid);
    assert_neighbours_in_bounds_and_distinct(grid);
    assert_neighbour_counts(grid);
}
