use crate::expression::{EvalError, Expression};

fn num(n: u64) -> Box<Expression> {
    Box::new(Expression::Number(n))
}

#[test]
fn test_literal_evaluates_to_itself() {
    assert_eq!(Expression::Number(7).evaluate(), Ok(7));
}

#[test]
fn test_zero_literal_rejected() {
    assert_eq!(
        Expression::Number(0).evaluate(),
        Err(EvalError::NonPositiveResult)
    );
}

#[test]
fn test_addition() {
    let expr = Expression::Add(num(75), num(25));
    assert_eq!(expr.evaluate(), Ok(100));
}

#[test]
fn test_subtraction_positive() {
    let expr = Expression::Sub(num(10), num(4));
    assert_eq!(expr.evaluate(), Ok(6));
}

#[test]
fn test_subtraction_to_zero_rejected() {
    let expr = Expression::Sub(num(6), num(6));
    assert_eq!(expr.evaluate(), Err(EvalError::NonPositiveResult));
}

#[test]
fn test_subtraction_negative_rejected() {
    let expr = Expression::Sub(num(3), num(6));
    assert_eq!(expr.evaluate(), Err(EvalError::NonPositiveResult));
}

#[test]
fn test_exact_division() {
    let expr = Expression::Div(num(100), num(25));
    assert_eq!(expr.evaluate(), Ok(4));
}

#[test]
fn test_inexact_division_rejected() {
    let expr = Expression::Div(num(6), num(4));
    assert_eq!(expr.evaluate(), Err(EvalError::InexactDivision(6, 4)));
}

#[test]
fn test_division_by_zero_literal_rejected() {
    // The zero literal itself fails before the division rule fires
    let expr = Expression::Div(num(6), num(0));
    assert_eq!(expr.evaluate(), Err(EvalError::NonPositiveResult));
}

#[test]
fn test_nested_rule_violation_invalidates_whole_tree() {
    // (3 - 6) + 10: the inner subtraction is already illegal
    let expr = Expression::Add(Box::new(Expression::Sub(num(3), num(6))), num(10));
    assert_eq!(expr.evaluate(), Err(EvalError::NonPositiveResult));
}

#[test]
fn test_overflow_rejected() {
    let expr = Expression::Mul(num(u64::MAX), num(2));
    assert_eq!(expr.evaluate(), Err(EvalError::Overflow));
}

#[test]
fn test_display_minimal_parens() {
    let expr = Expression::Mul(Box::new(Expression::Add(num(6), num(3))), num(100));
    assert_eq!(format!("{}", expr), "(6 + 3) * 100");

    let expr = Expression::Sub(num(50), Box::new(Expression::Sub(num(25), num(6))));
    assert_eq!(format!("{}", expr), "50 - (25 - 6)");

    let expr = Expression::Add(num(1), Box::new(Expression::Mul(num(2), num(3))));
    assert_eq!(format!("{}", expr), "1 + 2 * 3");
}
