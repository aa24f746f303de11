//! Request validation and sum bounds

mod bounds;
mod errors;
mod validation;

pub use bounds::{is_reachable, sum_bounds};
pub use errors::UtilsError;
pub use validation::validate_request;
