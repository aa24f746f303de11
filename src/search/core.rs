use log::{debug, info};
use rayon::prelude::*;

use crate::search::SearchConfig;
use crate::search::constants::{DIGIT_COUNT, MAX_DIGIT, MIN_DIGIT};

/// Backtracking search for strictly increasing digit combinations with a fixed sum
pub struct CombinationSearch {
    config: SearchConfig,
}

impl CombinationSearch {
    /// Create a sequential search
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a search with an explicit configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the search configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find every combination of `len` distinct digits that sums to `target`.
    ///
    /// Combinations are strictly increasing and returned in lexicographic order.
    pub fn find_combinations(&self, target: u32, len: usize) -> Vec<Vec<u8>> {
        info!(
            "Searching for {}-digit combinations summing to {}",
            len, target
        );

        let found = if self.config.parallel && len > 0 {
            self.find_parallel(target, len)
        } else {
            let mut found = Vec::new();
            let mut candidate = Vec::with_capacity(len.min(DIGIT_COUNT));
            Self::backtrack(MIN_DIGIT, target, len, &mut candidate, &mut found);
            found
        };

        info!("Found {} combinations", found.len());
        found
    }

    /// Fan out over the first digit; results are concatenated in digit order
    fn find_parallel(&self, target: u32, len: usize) -> Vec<Vec<u8>> {
        (MIN_DIGIT..=MAX_DIGIT)
            .into_par_iter()
            .filter(|&first| u32::from(first) <= target)
            .map(|first| {
                let mut found = Vec::new();
                let mut candidate = Vec::with_capacity(len.min(DIGIT_COUNT));
                candidate.push(first);
                Self::backtrack(
                    first + 1,
                    target - u32::from(first),
                    len,
                    &mut candidate,
                    &mut found,
                );
                debug!(
                    "Branch starting at {} produced {} combinations",
                    first,
                    found.len()
                );
                found
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn backtrack(
        start: u8,
        remaining: u32,
        len: usize,
        candidate: &mut Vec<u8>,
        found: &mut Vec<Vec<u8>>,
    ) {
        if candidate.len() == len {
            if remaining == 0 {
                debug!("Accepted combination {:?}", candidate);
                found.push(candidate.clone());
            }
            return;
        }

        for digit in start..=MAX_DIGIT {
            // Digits only grow from here, so nothing later at this depth fits either.
            if u32::from(digit) > remaining {
                break;
            }
            candidate.push(digit);
            Self::backtrack(digit + 1, remaining - u32::from(digit), len, candidate, found);
            candidate.pop();
        }
    }
}

impl Default for CombinationSearch {
    fn default() -> Self {
        Self::new()
    }
}
