//! Error types for grid and route validation.
//!
//! Both are precondition errors: they are raised while building the
//! inputs of a search and never once a search is running.

use std::error::Error;
use std::fmt;

use crate::pos::Pos;

/// Errors arising from letter grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no cells.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// The required row length (the number of rows).
        expected: usize,
        /// The row length actually supplied.
        found: usize,
    },
    /// The requested size exceeds [`GridError::MAX_SIZE`].
    TooLarge {
        /// The requested side length.
        size: usize,
    },
    /// A letter string does not hold exactly `size * size` letters.
    LetterCount {
        /// The required number of letters.
        expected: usize,
        /// The number of letters supplied.
        found: usize,
    },
}

impl GridError {
    /// Largest supported side length. A route is bounded by the cell
    /// count, so this also bounds the length of any found word.
    pub const MAX_SIZE: usize = 64;
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one cell"),
            Self::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not square: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { size } => write!(
                f,
                "grid size {size} exceeds maximum of {}",
                Self::MAX_SIZE
            ),
            Self::LetterCount { expected, found } => {
                write!(f, "expected {expected} letters, got {found}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from validated route construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// A route must visit at least one cell.
    Empty,
    /// A position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// The grid side length.
        size: usize,
    },
    /// A position appears twice in the route.
    Repeated {
        /// The repeated position.
        pos: Pos,
    },
    /// Two consecutive positions are not neighbours.
    NotAdjacent {
        /// The earlier position.
        from: Pos,
        /// The later position.
        to: Pos,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "route must visit at least one cell"),
            Self::OutOfBounds { pos, size } => {
                write!(f, "position {pos} out of bounds for {size}x{size} grid")
            }
            Self::Repeated { pos } => write!(f, "position {pos} visited twice"),
            Self::NotAdjacent { from, to } => {
                write!(f, "positions {from} and {to} are not adjacent")
            }
        }
    }
}

impl Error for RouteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_square_message_names_row() {
        let e = GridError::NotSquare {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(
            e.to_string(),
            "grid is not square: row 2 has 3 cells, expected 4"
        );
    }

    #[test]
    fn route_errors_display_positions() {
        let e = RouteError::NotAdjacent {
            from: Pos::new(0, 0),
            to: Pos::new(0, 2),
        };
        assert_eq!(e.to_string(), "positions (0, 0) and (0, 2) are not adjacent");
    }
}
