use thiserror::Error;

use crate::expression::EvalError;

/// Every way a guess can be invalid
///
/// Invalidity is always a returned value; nothing in the validation path
/// panics on user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess is empty")]
    Empty,
    #[error("Guess contains an invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("Guess is not a well-formed expression")]
    Malformed,
    #[error("Arithmetic rule violation: {0}")]
    Rule(#[from] EvalError),
    #[error("Number {0} is not available (or used too many times)")]
    UnavailableNumber(u64),
    #[error("No combination of the remaining numbers makes {0}")]
    Unresolvable(u64),
}
