use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Invalid request: {0}")]
    UtilsError(#[from] UtilsError),
}
