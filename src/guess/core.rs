use log::debug;

use crate::guess::errors::GuessError;
use crate::guess::normalize::normalize;
use crate::guess::parse::{parse, tokenize};
use crate::utils::counts;

/// Validate and evaluate a free-text guess against the available selection.
///
/// The guess is normalized, parsed under the restricted grammar and evaluated
/// under the game rules (only `+ - * /`, every intermediate result a positive
/// integer). Separately, each literal must be present in `available` with
/// enough remaining copies. Both checks must pass.
///
/// A successful return is the evaluated value; whether it matches any
/// particular target is the caller's concern. An `Err` means the guess is
/// invalid, which is distinct from "valid but wrong".
///
/// # Errors
///
/// Returns a [`GuessError`] describing the first failure found: a syntax
/// problem, an arithmetic rule violation, or a number used without enough
/// copies in the selection.
pub fn validate(raw: &str, available: &[u64]) -> Result<u64, GuessError> {
    let normalized = normalize(raw);
    let tokens = tokenize(&normalized)?;
    let (expr, literals) = parse(&tokens)?;

    check_usage(&literals, available)?;

    let value = expr.evaluate()?;
    debug!("Guess {:?} evaluated to {}", raw, value);
    Ok(value)
}

/// Consume one copy from a working ledger per literal occurrence,
/// left-to-right.
fn check_usage(literals: &[u64], available: &[u64]) -> Result<(), GuessError> {
    let mut ledger = counts(available);

    for &literal in literals {
        match ledger.get_mut(&literal) {
            Some(remaining) if *remaining > 0 => *remaining -= 1,
            _ => {
                debug!("Literal {} exceeds available copies", literal);
                return Err(GuessError::UnavailableNumber(literal));
            }
        }
    }

    Ok(())
}
