//! Square letter grid with 8-connected neighbourhood (cardinal + diagonal).

use std::fmt;

use lexgrid_core::{GridError, Pos};
use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// An immutable N×N matrix of letters.
///
/// Each cell has position `(row, col)`. Neighbours include the four
/// cardinal directions plus four diagonals; out-of-range neighbours are
/// omitted, never wrapped. Once built a grid is never mutated, so it is
/// shared between search workers without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from its rows.
    ///
    /// Returns `Err(GridError::Empty)` if there are no rows or the rows
    /// are empty, `Err(GridError::NotSquare)` if any row's length differs
    /// from the row count, and `Err(GridError::TooLarge)` past
    /// [`GridError::MAX_SIZE`].
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = char>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let size = rows.len();
        if size == 0 || rows.iter().all(|r| r.is_empty()) {
            return Err(GridError::Empty);
        }
        if size > GridError::MAX_SIZE {
            return Err(GridError::TooLarge { size });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a `size`×`size` grid from row-major letters.
    pub fn from_letters(size: usize, letters: &str) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        if size > GridError::MAX_SIZE {
            return Err(GridError::TooLarge { size });
        }
        let cells: Vec<char> = letters.chars().collect();
        if cells.len() != size * size {
            return Err(GridError::LetterCount {
                expected: size * size,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Parse a grid from text.
    ///
    /// Rows are separated by `/`, `,` or whitespace: `"CA/TS"`,
    /// `"CA TS"`. A single unseparated token whose length is a perfect
    /// square is read row-major, so `"CATS"` is the same 2×2 grid.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
            .filter(|r| !r.is_empty())
            .collect();
        if let [single] = rows.as_slice() {
            let n = single.chars().count();
            let side = n.isqrt();
            if side > 1 && side * side == n {
                return Self::from_letters(side, single);
            }
        }
        Self::from_rows(rows.iter().map(|r| r.chars()))
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, N².
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// The letter at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds. Positions handed out by
    /// [`positions`](Self::positions) and [`neighbours`](Self::neighbours)
    /// are always in bounds.
    pub fn letter(&self, pos: Pos) -> char {
        self.cells[pos.row * self.size + pos.col]
    }

    /// The letter at `pos`, or `None` if out of bounds.
    pub fn get(&self, pos: Pos) -> Option<char> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.size + pos.col])
    }

    /// All positions in row-major order: `(0,0), (0,1), ..., (N-1,N-1)`.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Pos::new(row, col)))
    }

    /// Letters of one row.
    pub fn row(&self, row: usize) -> &[char] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// The 8-connected neighbours of `pos` that lie inside the grid.
    ///
    /// Order is deterministic (N, S, W, E, NW, NE, SW, SE with absent
    /// directions skipped). Never contains `pos` itself.
    pub fn neighbours(&self, pos: Pos) -> SmallVec<[Pos; 8]> {
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let nr = resolve_axis(pos.row, dr, self.size);
            let nc = resolve_axis(pos.col, dc, self.size);
            if let (Some(row), Some(col)) = (nr, nc) {
                result.push(Pos::new(row, col));
            }
        }
        result
    }
}

/// Step one axis by `delta`, returning `None` when it leaves `[0, len)`.
fn resolve_axis(val: usize, delta: isize, len: usize) -> Option<usize> {
    val.checked_add_signed(delta).filter(|&v| v < len)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            let mut first = true;
            for &ch in self.row(r) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
