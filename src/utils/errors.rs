use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Selection cannot be empty")]
    EmptySelection,
    #[error("Selection must contain only positive integers")]
    ZeroInSelection,
}
