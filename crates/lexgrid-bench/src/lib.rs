//! Benchmark profiles and utilities for the lexgrid solver.
//!
//! Provides pre-built boards and dictionaries for benchmarking:
//!
//! - [`reference_profile`]: classic 4x4 board with a 20K-word lexicon
//! - [`stress_profile`]: 6x6 board with a 100K-word lexicon
//! - [`synthetic_words`]: deterministic word list with a realistic hit rate

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lexgrid_dict::Lexicon;
use lexgrid_grid::{roll_board, DiceSet, Grid, GridError, Pos, Route};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A board and the dictionary to search it with.
pub struct BenchProfile {
    /// The board being searched.
    pub grid: Grid,
    /// The dictionary.
    pub lexicon: Lexicon,
}

/// Build a reference benchmark profile: 4x4 board, 20K words.
pub fn reference_profile(seed: u64) -> Result<BenchProfile, GridError> {
    Ok(BenchProfile {
        grid: roll_board(4, seed)?,
        lexicon: Lexicon::from_words(synthetic_words(20_000, seed)?),
    })
}

/// Build a stress benchmark profile: 6x6 board, 100K words.
///
/// Same shape as [`reference_profile`] with 2.25x the cells and a five
/// times larger dictionary, so the frontier grows much wider.
pub fn stress_profile(seed: u64) -> Result<BenchProfile, GridError> {
    Ok(BenchProfile {
        grid: roll_board(6, seed)?,
        lexicon: Lexicon::from_words(synthetic_words(100_000, seed)?),
    })
}

/// Generate `count` words by tracing random self-avoiding walks of 3 to 8
/// cells over freshly rolled 6x6 boards.
///
/// Words made this way share prefixes the way real vocabulary does, so
/// pruning behaves like it would with a natural-language word list.
/// Duplicates are possible; the lexicon ignores them.
pub fn synthetic_words(count: usize, seed: u64) -> Result<Vec<String>, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    let dice = DiceSet::classic();
    let mut words = Vec::with_capacity(count);
    let mut board = dice.roll(6, &mut rng)?;
    while words.len() < count {
        // A fresh board every 64 words keeps the letter mix varied.
        if !words.is_empty() && words.len() % 64 == 0 {
            board = dice.roll(6, &mut rng)?;
        }
        let target = rng.random_range(3..=8);
        let start = Pos::new(rng.random_range(0..6), rng.random_range(0..6));
        let mut route = Route::singleton(start);
        while route.len() < target {
            let open: Vec<_> = board
                .neighbours(route.last())
                .into_iter()
                .filter(|p| !route.contains(*p))
                .collect();
            match open.choose(&mut rng) {
                Some(&next) => route = route.extended(next),
                None => break,
            }
        }
        words.push(route.word(&board));
    }
    Ok(words)
}
