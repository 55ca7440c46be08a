//! Test utilities and fixtures for lexgrid development.
//!
//! Provides a small set-backed [`PrefixIndex`] ([`SetIndex`]), board
//! helpers, and [`brute_force_words`], a single-threaded reference search
//! the parallel engine is checked against. Instrumented and failing
//! indexes live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashSet;

use lexgrid_core::{Pos, PrefixIndex};
use lexgrid_grid::{FoundWord, Grid, Route};

pub use fixtures::{CountingIndex, PanickingIndex};

/// A [`PrefixIndex`] over an explicit word list, with every prefix
/// precomputed into a hash set.
#[derive(Clone, Debug, Default)]
pub struct SetIndex {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl SetIndex {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for w in words {
            let w = w.as_ref();
            for (i, _) in w.char_indices() {
                index.prefixes.insert(w[..i].to_owned());
            }
            index.prefixes.insert(w.to_owned());
            index.words.insert(w.to_owned());
        }
        index
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl PrefixIndex for SetIndex {
    fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }
}

/// Accepts every prefix; `is_word` is always false. Forces the search to
/// enumerate every simple path.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl PrefixIndex for AcceptAll {
    fn is_prefix(&self, _: &str) -> bool {
        true
    }

    fn is_word(&self, _: &str) -> bool {
        false
    }
}

// ── Boards ───────────────────────────────────────────────────────

/// The 2×2 board
///
/// ```text
/// C A
/// T S
/// ```
pub fn cats_grid() -> Grid {
    Grid::from_letters(2, "CATS").expect("valid 2x2 board")
}

/// An N×N board with every cell set to `letter`.
pub fn uniform_grid(size: usize, letter: char) -> Grid {
    let letters: String = std::iter::repeat(letter).take(size * size).collect();
    Grid::from_letters(size, &letters).expect("valid uniform board")
}

/// Shorthand for building a validated route in tests.
pub fn route(grid: &Grid, cells: &[(usize, usize)]) -> Route {
    Route::from_cells(grid, cells.iter().map(|&(r, c)| Pos::new(r, c)))
        .expect("valid route")
}

/// Number of simple paths (of any length ≥ 1) in the 8-connected N×N
/// grid, for small N: 1, 64, 10305.
pub fn simple_path_count(size: usize) -> Option<u64> {
    match size {
        1 => Some(1),
        2 => Some(64),
        3 => Some(10_305),
        _ => None,
    }
}

// ── Reference search ─────────────────────────────────────────────

/// Single-threaded depth-first reference search with the same pruning
/// and emission rules as the engine. Returns found words sorted by
/// `(word, route)` so results compare directly.
pub fn brute_force_words(
    grid: &Grid,
    index: &dyn PrefixIndex,
    min_word_len: usize,
) -> Vec<FoundWord> {
    let mut out = Vec::new();
    for pos in grid.positions() {
        dfs(grid, index, min_word_len, Route::singleton(pos), &mut out);
    }
    sort_found(&mut out);
    out
}

fn dfs(
    grid: &Grid,
    index: &dyn PrefixIndex,
    min_word_len: usize,
    route: Route,
    out: &mut Vec<FoundWord>,
) {
    let word = route.word(grid);
    if !index.is_prefix(&word) {
        return;
    }
    for next in grid.neighbours(route.last()) {
        if !route.contains(next) {
            dfs(grid, index, min_word_len, route.extended(next), out);
        }
    }
    if route.len() >= min_word_len && index.is_word(&word) {
        out.push(FoundWord { word, route });
    }
}

/// Sort found words by word, then by route cells, for order-independent
/// comparison.
pub fn sort_found(found: &mut [FoundWord]) {
    found.sort_by(|a, b| {
        a.word
            .cmp(&b.word)
            .then_with(|| a.route.cells().cmp(b.route.cells()))
    });
}
