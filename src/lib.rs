//! Digitsum - A library for finding combinations of distinct digits with a given sum
//!
//! This library enumerates every set of `k` distinct digits from 1 to 9 whose sum is
//! exactly `n`, returning each set as a strictly increasing sequence.

pub mod iterator;
pub mod search;
pub mod utils;

// Re-export the main public API
pub use iterator::{CombinationIterator, iter_combinations};
pub use search::constants::{MAX_DIGIT, MIN_DIGIT};
pub use search::{CombinationSearch, SearchConfig, SearchError};
pub use utils::{UtilsError, is_reachable, sum_bounds, validate_request};

/// Find all combinations of `k` distinct digits from 1 to 9 that sum to `n`
///
/// This is a convenience function that validates the request and runs a default
/// sequential search.
///
/// # Arguments
///
/// * `n` - The target sum
/// * `k` - The number of digits in each combination
///
/// # Returns
///
/// * `Ok(combinations)` - Every matching combination in lexicographic order; empty when
///   none exist, including when `k` is larger than 9
/// * `Err(SearchError)` - If the request is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * `n` or `k` is negative
/// * `n` does not fit in a `u32`
///
/// # Examples
///
/// ```
/// use digitsum::find_combinations;
///
/// let combos = find_combinations(9, 3).unwrap();
/// assert_eq!(combos, vec![vec![1, 2, 6], vec![1, 3, 5], vec![2, 3, 4]]);
///
/// assert!(find_combinations(-1, 3).is_err());
/// ```
pub fn find_combinations(n: i64, k: i64) -> Result<Vec<Vec<u8>>, SearchError> {
    let (target, len) = validate_request(n, k)?;

    let search = CombinationSearch::new();
    Ok(search.find_combinations(target, len))
}
