use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::EvalError;

impl Expression {
    /// Evaluate the expression under the numbers-game rules: every literal
    /// and every intermediate result must be a positive integer.
    ///
    /// # Errors
    ///
    /// Returns an error when the expression contains:
    /// - A zero literal
    /// - A subtraction whose result would be zero or negative
    /// - A division that is inexact or by zero
    /// - Any intermediate result that overflows
    pub fn evaluate(&self) -> Result<u64, EvalError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => {
                if *n == 0 {
                    Err(EvalError::NonPositiveResult)
                } else {
                    Ok(*n)
                }
            }
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_add(right).ok_or(EvalError::Overflow)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if left > right {
                    Ok(left - right)
                } else {
                    debug!("Non-positive subtraction: {} - {}", left, right);
                    Err(EvalError::NonPositiveResult)
                }
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_mul(right).ok_or(EvalError::Overflow)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0 {
                    debug!("Division by zero attempted");
                    Err(EvalError::DivisionByZero)
                } else if left % right != 0 {
                    debug!("Inexact division: {} / {}", left, right);
                    Err(EvalError::InexactDivision(left, right))
                } else {
                    Ok(left / right)
                }
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}
