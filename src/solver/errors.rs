use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid selection: {0}")]
    UtilsError(#[from] UtilsError),
}
