use log::debug;

use crate::search::constants::{DIGIT_COUNT, MAX_DIGIT};

/// Smallest and largest sum reachable with `len` distinct digits.
///
/// Returns `None` when `len` exceeds the number of available digits.
pub fn sum_bounds(len: usize) -> Option<(u32, u32)> {
    if len > DIGIT_COUNT {
        debug!("No bounds for length {}: only {} digits", len, DIGIT_COUNT);
        return None;
    }

    let len = len as u32;
    let top = u32::from(MAX_DIGIT);
    let min = len * (len + 1) / 2;
    let max = len * (2 * top - len + 1) / 2;
    Some((min, max))
}

/// Whether `target` lies inside [`sum_bounds`] for `len`.
pub fn is_reachable(target: u32, len: usize) -> bool {
    sum_bounds(len).is_some_and(|(min, max)| (min..=max).contains(&target))
}
