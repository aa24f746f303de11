use crate::search::constants::{MAX_DIGIT, MIN_DIGIT};
use crate::search::{CombinationSearch, SearchConfig};
use crate::utils::sum_bounds;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every subset of the digit alphabet with the requested size and sum, in lexicographic order
fn brute_force(target: u32, len: usize) -> Vec<Vec<u8>> {
    let mut out: Vec<Vec<u8>> = (0u32..1 << 9)
        .map(|mask| {
            (MIN_DIGIT..=MAX_DIGIT)
                .filter(|d| mask & (1 << (d - 1)) != 0)
                .collect::<Vec<u8>>()
        })
        .filter(|combo| {
            combo.len() == len && combo.iter().map(|&d| u32::from(d)).sum::<u32>() == target
        })
        .collect();
    out.sort();
    out
}

#[test]
fn test_nine_with_three_digits() {
    init_logging();
    let search = CombinationSearch::new();
    assert_eq!(
        search.find_combinations(9, 3),
        vec![vec![1, 2, 6], vec![1, 3, 5], vec![2, 3, 4]]
    );
}

#[test]
fn test_boundaries() {
    let search = CombinationSearch::new();
    assert_eq!(search.find_combinations(0, 0), vec![Vec::<u8>::new()]);
    assert_eq!(search.find_combinations(1, 1), vec![vec![1]]);
    assert_eq!(search.find_combinations(9, 1), vec![vec![9]]);
    assert_eq!(
        search.find_combinations(45, 9),
        vec![vec![1, 2, 3, 4, 5, 6, 7, 8, 9]]
    );
}

#[test]
fn test_unsatisfiable() {
    let search = CombinationSearch::new();
    assert!(search.find_combinations(45, 1).is_empty());
    assert!(search.find_combinations(5, 0).is_empty());
    assert!(search.find_combinations(0, 1).is_empty());
    assert!(search.find_combinations(45, 10).is_empty());
    assert!(search.find_combinations(100, 3).is_empty());
}

#[test]
fn test_out_of_bounds_targets_are_empty() {
    let search = CombinationSearch::new();
    for len in 1..=9 {
        if let Some((min, max)) = sum_bounds(len) {
            assert!(search.find_combinations(min - 1, len).is_empty());
            assert!(search.find_combinations(max + 1, len).is_empty());
            assert!(!search.find_combinations(min, len).is_empty());
            assert!(!search.find_combinations(max, len).is_empty());
        }
    }
}

#[test]
fn test_results_are_valid_combinations() {
    let search = CombinationSearch::new();
    for len in 0..=9 {
        for target in 0..=50 {
            for combo in search.find_combinations(target, len) {
                assert_eq!(combo.len(), len);
                assert!(combo.iter().all(|d| (MIN_DIGIT..=MAX_DIGIT).contains(d)));
                assert!(combo.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(combo.iter().map(|&d| u32::from(d)).sum::<u32>(), target);
            }
        }
    }
}

#[test]
fn test_matches_brute_force() {
    let search = CombinationSearch::new();
    for len in 0..=9 {
        for target in 0..=46 {
            assert_eq!(
                search.find_combinations(target, len),
                brute_force(target, len),
                "target={}, len={}",
                target,
                len
            );
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let search = CombinationSearch::new();
    let first = search.find_combinations(20, 4);
    assert!(!first.is_empty());
    assert_eq!(first, search.find_combinations(20, 4));
}

#[test]
fn test_parallel_matches_sequential() {
    init_logging();
    let sequential = CombinationSearch::new();
    let parallel = CombinationSearch::with_config(SearchConfig { parallel: true });
    assert!(parallel.config().parallel);

    for len in 0..=10 {
        for target in 0..=46 {
            assert_eq!(
                parallel.find_combinations(target, len),
                sequential.find_combinations(target, len),
                "target={}, len={}",
                target,
                len
            );
        }
    }
}

#[test]
fn test_default_config_is_sequential() {
    let search = CombinationSearch::default();
    assert_eq!(search.config(), &SearchConfig { parallel: false });
}

#[test]
fn test_huge_length_is_empty() {
    let sequential = CombinationSearch::new();
    let parallel = CombinationSearch::with_config(SearchConfig { parallel: true });
    for len in [100, usize::MAX / 2, usize::MAX] {
        assert!(sequential.find_combinations(5, len).is_empty());
        assert!(sequential.find_combinations(45, len).is_empty());
        assert!(parallel.find_combinations(5, len).is_empty());
        assert!(parallel.find_combinations(45, len).is_empty());
    }
}
