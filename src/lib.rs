//! countdown-numbers - Solver and guess checker for the Countdown numbers game
//!
//! Given a selection of positive integers and a target, the solver finds every
//! arithmetic combination (addition, subtraction, multiplication, exact
//! division, parentheses, each number used at most once) that comes closest to
//! the target. The guess checker safely parses and evaluates a player's
//! free-text expression under the same rules, optionally resolving composite
//! literals by constructing them from the unused remainder.

pub mod expression;
pub mod guess;
pub mod resolver;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{EvalError, Expression};
pub use guess::{GuessError, normalize, validate};
pub use resolver::{check_guess, resolve};
pub use solver::{Solution, Solutions, SolverError, solve};
pub use utils::{UtilsError, validate_selection};

/// Solve a numbers round: find the closest reachable values to the target
///
/// This is a convenience wrapper that validates the selection before running
/// the exhaustive search.
///
/// # Errors
///
/// Returns an error if the selection is empty or contains a zero.
///
/// # Examples
///
/// ```
/// use countdown_numbers::solve_numbers;
///
/// let solutions = solve_numbers(952, &[100, 75, 50, 25, 6, 3]).unwrap();
/// assert_eq!(solutions.difference, 0);
/// ```
pub fn solve_numbers(target: u64, numbers: &[u64]) -> Result<Solutions, SolverError> {
    validate_selection(numbers)?;
    Ok(solve(target, numbers))
}

/// Check a player's guess against the selection, resolving composite literals
///
/// On success returns the evaluated value and the fully expanded expression.
/// An `Err` means the guess is invalid; a valid guess whose value differs
/// from the round's target is still `Ok`, and telling the two apart is the
/// caller's job.
///
/// # Examples
///
/// ```
/// use countdown_numbers::check_numbers_guess;
///
/// let (value, _expanded) = check_numbers_guess("(6+3)*100", &[100, 75, 50, 25, 6, 3]).unwrap();
/// assert_eq!(value, 900);
///
/// assert!(check_numbers_guess("3-6", &[3, 6]).is_err());
/// ```
pub fn check_numbers_guess(raw: &str, available: &[u64]) -> Result<(u64, String), GuessError> {
    check_guess(raw, available)
}
