/// A guess expression over the restricted Countdown grammar
///
/// Only positive integer literals and the four binary operators exist; there
/// are no unary operators, identifiers or function calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(u64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}
