//! Property tests: the parallel search agrees with a sequential
//! reference on random boards, and everything it emits is valid.

use std::sync::Arc;

use lexgrid_core::PrefixIndex;
use lexgrid_engine::{SearchConfig, Solver, VecSink};
use lexgrid_grid::Grid;
use lexgrid_test_utils::{
    brute_force_words, simple_path_count, sort_found, uniform_grid, AcceptAll, SetIndex,
};
use proptest::prelude::*;

fn arb_board() -> impl Strategy<Value = Grid> {
    (2usize..=4).prop_flat_map(|n| {
        proptest::collection::vec(prop::sample::select(vec!['A', 'E', 'R', 'S', 'T']), n * n)
            .prop_map(move |letters| {
                Grid::from_letters(n, &letters.into_iter().collect::<String>()).unwrap()
            })
    })
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[AERST]{1,5}", 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn parallel_search_matches_reference(
        grid in arb_board(),
        words in arb_words(),
        workers in 1usize..6,
        min_word_len in 1usize..3,
    ) {
        let index = Arc::new(SetIndex::new(&words));
        let sink = Arc::new(VecSink::new());
        let mut solver = Solver::new(
            grid.clone(),
            index.clone(),
            SearchConfig { worker_count: Some(workers), min_word_len },
        ).unwrap();
        let report = solver.run(sink.clone()).unwrap();

        let mut found = sink.take();
        for f in &found {
            prop_assert!(f.route.validate(&grid).is_ok());
            prop_assert_eq!(&f.route.word(&grid), &f.word);
            prop_assert!(index.is_word(&f.word));
            prop_assert!(f.word.chars().count() >= min_word_len);
            prop_assert!(f.route.len() <= grid.cell_count());
        }

        sort_found(&mut found);
        prop_assert_eq!(&found, &brute_force_words(&grid, index.as_ref(), min_word_len));
        prop_assert_eq!(report.metrics.words_found as usize, found.len());
        prop_assert_eq!(report.metrics.routes_failed, 0);
    }
}

#[test]
fn exhaustive_search_terminates_and_visits_every_simple_path() {
    for workers in [1, 3, 16] {
        let mut solver = Solver::new(
            uniform_grid(3, 'A'),
            Arc::new(AcceptAll),
            SearchConfig {
                worker_count: Some(workers),
                ..Default::default()
            },
        )
        .unwrap();
        let report = solver.run(Arc::new(VecSink::new())).unwrap();
        let expected = simple_path_count(3).unwrap();
        assert_eq!(report.metrics.routes_expanded, expected);
        assert_eq!(report.metrics.routes_pushed, expected);
        assert_eq!(report.metrics.routes_pruned, 0);
        assert_eq!(report.workers_joined, workers);
    }
}
