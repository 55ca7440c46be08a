//! Criterion micro-benchmarks for lexicon construction and lookups.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lexgrid_bench::synthetic_words;
use lexgrid_core::PrefixIndex;
use lexgrid_dict::Lexicon;
use lexgrid_grid::roll_board;

/// Benchmark: build a trie from 20K words.
fn bench_build_20k(c: &mut Criterion) {
    let words = synthetic_words(20_000, 42).unwrap();

    c.bench_function("lexicon_build_20k", |b| {
        b.iter(|| black_box(Lexicon::from_words(&words)));
    });
}

/// Benchmark: `is_prefix` over 1K probe words drawn from unseen boards.
fn bench_prefix_lookups(c: &mut Criterion) {
    let words = synthetic_words(20_000, 42).unwrap();
    let lexicon = Lexicon::from_words(&words);
    let probes: Vec<String> = synthetic_words(1_000, 7).unwrap();

    c.bench_function("lexicon_is_prefix_1k", |b| {
        b.iter(|| {
            for p in &probes {
                black_box(lexicon.is_prefix(p));
            }
        });
    });
}

/// Benchmark: neighbours() on every cell of a 6x6 board.
fn bench_neighbours_6x6(c: &mut Criterion) {
    let grid = roll_board(6, 42).unwrap();

    c.bench_function("neighbours_6x6", |b| {
        b.iter(|| {
            for pos in grid.positions() {
                black_box(grid.neighbours(pos));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_20k,
    bench_prefix_lookups,
    bench_neighbours_6x6
);
criterion_main!(benches);
