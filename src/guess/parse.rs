use log::debug;

use crate::expression::Expression;
use crate::guess::errors::GuessError;

/// One lexical token of a normalized guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Number(u64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Split a normalized guess into tokens.
///
/// Expects the text to contain only digits, the four canonical operators and
/// parentheses; anything else is an invalid character. Multi-digit literals
/// with a leading zero are rejected outright.
pub(crate) fn tokenize(normalized: &str) -> Result<Vec<Token>, GuessError> {
    if normalized.is_empty() {
        return Err(GuessError::Empty);
    }

    let mut tokens = Vec::new();
    let chars: Vec<char> = normalized.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' => {
                let start = pos;
                while pos + 1 < chars.len() && chars[pos + 1].is_ascii_digit() {
                    pos += 1;
                }
                let literal: String = chars[start..=pos].iter().collect();
                if literal.len() > 1 && literal.starts_with('0') {
                    debug!("Rejecting literal with leading zero: {:?}", literal);
                    return Err(GuessError::Malformed);
                }
                let value = literal.parse().map_err(|_| GuessError::Malformed)?;
                Token::Number(value)
            }
            other => return Err(GuessError::InvalidCharacter(other)),
        };
        tokens.push(token);
        pos += 1;
    }

    Ok(tokens)
}

/// Parse a token stream into an [`Expression`], collecting every literal in
/// left-to-right order for the usage check.
///
/// Grammar (standard precedence, left associative):
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := literal | '(' expr ')'
/// ```
///
/// Unary operators and any other construct are parse failures.
pub(crate) fn parse(tokens: &[Token]) -> Result<(Expression, Vec<u64>), GuessError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        literals: Vec::new(),
    };

    let expr = parser.expr()?;
    if parser.pos != tokens.len() {
        debug!("Trailing tokens after position {}", parser.pos);
        return Err(GuessError::Malformed);
    }

    Ok((expr, parser.literals))
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    literals: Vec<u64>,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<Expression, GuessError> {
        let mut left = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.pos += 1;
                    let right = self.term()?;
                    left = Expression::Add(Box::new(left), Box::new(right));
                }
                Token::Minus => {
                    self.pos += 1;
                    let right = self.term()?;
                    left = Expression::Sub(Box::new(left), Box::new(right));
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expression, GuessError> {
        let mut left = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.pos += 1;
                    let right = self.factor()?;
                    left = Expression::Mul(Box::new(left), Box::new(right));
                }
                Token::Slash => {
                    self.pos += 1;
                    let right = self.factor()?;
                    left = Expression::Div(Box::new(left), Box::new(right));
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expression, GuessError> {
        match self.advance() {
            Some(Token::Number(n)) => {
                self.literals.push(n);
                Ok(Expression::Number(n))
            }
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(GuessError::Malformed),
                }
            }
            _ => Err(GuessError::Malformed),
        }
    }
}
