use thiserror::Error;

/// Rule violations raised while evaluating a guess expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("{0} is not exactly divisible by {1}")]
    InexactDivision(u64, u64),
    #[error("Intermediate result must be a positive integer")]
    NonPositiveResult,
    #[error("Intermediate result is out of range")]
    Overflow,
}
