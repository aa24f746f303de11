use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Converts a signed `(target, length)` request into the unsigned domain the search runs on.
///
/// # Errors
///
/// Returns an error if either value is negative, or if the target does not fit in a `u32`.
pub fn validate_request(target: i64, len: i64) -> Result<(u32, usize), UtilsError> {
    debug!("Validating request: target={}, length={}", target, len);

    if target < 0 {
        warn!("Target sum is negative: {}", target);
        return Err(UtilsError::NegativeTarget(target));
    }

    if len < 0 {
        warn!("Combination length is negative: {}", len);
        return Err(UtilsError::NegativeLength(len));
    }

    let target = u32::try_from(target).map_err(|_| UtilsError::TargetTooLarge(target))?;
    // Lengths past the alphabet size are valid and simply produce no results.
    let len = usize::try_from(len).unwrap_or(usize::MAX);

    debug!("Request validation successful");
    Ok((target, len))
}
