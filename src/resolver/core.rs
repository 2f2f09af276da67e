use std::collections::HashMap;

use log::{debug, info};

use crate::guess::{GuessError, Token, normalize, tokenize, validate};
use crate::solver::solve;
use crate::utils::{counts, distinct_combinations};

/// Expand composite literals in a guess, then validate the expanded text.
///
/// On success returns the evaluated value together with the fully expanded
/// expression, so callers can show how a composite guess was read.
///
/// # Errors
///
/// Returns a [`GuessError`] when a literal cannot be resolved from the
/// remaining numbers or when the expanded guess fails validation.
pub fn check_guess(raw: &str, available: &[u64]) -> Result<(u64, String), GuessError> {
    let expanded = resolve(raw, available)?;
    let value = validate(&expanded, available)?;
    Ok((value, expanded))
}

/// Rewrite a guess so that every literal is either directly available or
/// replaced by a construction from the unused remainder.
///
/// Distinct literals are handled in the order first encountered. A literal
/// with direct copies in the ledger consumes them; one with none is handed to
/// the solver over sub-multisets of the unused remainder of increasing size,
/// and the first subset that reaches it exactly supplies the parenthesized
/// replacement text. A literal that neither route satisfies makes the whole
/// guess unresolvable.
///
/// Substitution happens token by token, so a literal's digits can never match
/// inside a longer literal or inside already-substituted text.
///
/// # Errors
///
/// Returns a [`GuessError`] on syntax problems in the raw guess or when a
/// literal is unresolvable.
pub fn resolve(raw: &str, available: &[u64]) -> Result<String, GuessError> {
    let normalized = normalize(raw);
    let tokens = tokenize(&normalized)?;

    let mut ledger = counts(available);
    let mut substitutions: HashMap<u64, String> = HashMap::new();

    for literal in distinct_literals(&tokens) {
        let occurrences = tokens
            .iter()
            .filter(|t| matches!(t, Token::Number(n) if *n == literal))
            .count();
        let direct = ledger.get(&literal).copied().unwrap_or(0);

        if direct > 0 {
            // Partial availability stays unsubstituted; the final validation
            // rejects any over-use
            let used = direct.min(occurrences);
            if let Some(remaining) = ledger.get_mut(&literal) {
                *remaining -= used;
            }
            debug!("Literal {} satisfied by {} direct cop(ies)", literal, used);
            continue;
        }

        let replacement = construct(literal, &mut ledger)?;
        info!("Composite literal {} expanded to {}", literal, replacement);
        substitutions.insert(literal, replacement);
    }

    Ok(render(&tokens, &substitutions))
}

/// Distinct literal values in first-encounter order
fn distinct_literals(tokens: &[Token]) -> Vec<u64> {
    let mut literals = Vec::new();
    for token in tokens {
        if let Token::Number(n) = token
            && !literals.contains(n)
        {
            literals.push(*n);
        }
    }
    literals
}

/// Build `literal` exactly from the unused remainder, consuming the numbers
/// of the first (smallest) subset the solver reaches it with.
fn construct(literal: u64, ledger: &mut HashMap<u64, usize>) -> Result<String, GuessError> {
    let mut remainder: Vec<u64> = ledger
        .iter()
        .flat_map(|(&value, &count)| std::iter::repeat_n(value, count))
        .collect();
    remainder.sort_unstable_by(|a, b| b.cmp(a));

    for size in 2..=remainder.len() {
        for subset in distinct_combinations(&remainder, size) {
            let solutions = solve(literal, &subset);
            if !solutions.is_exact() {
                continue;
            }
            let Some(solution) = solutions.results.first() else {
                continue;
            };

            debug!(
                "Constructed {} from {:?} as {}",
                literal, subset, solution.expression
            );
            for n in &subset {
                if let Some(remaining) = ledger.get_mut(n) {
                    *remaining -= 1;
                }
            }
            return Ok(format!("({})", solution.expression));
        }
    }

    debug!("No subset of {:?} constructs {}", remainder, literal);
    Err(GuessError::Unresolvable(literal))
}

/// Reassemble the token stream, rewriting substituted literals
fn render(tokens: &[Token], substitutions: &HashMap<u64, String>) -> String {
    let mut text = String::new();
    for token in tokens {
        match token {
            Token::Number(n) => match substitutions.get(n) {
                Some(replacement) => text.push_str(replacement),
                None => text.push_str(&n.to_string()),
            },
            Token::Plus => text.push('+'),
            Token::Minus => text.push('-'),
            Token::Star => text.push('*'),
            Token::Slash => text.push('/'),
            Token::LParen => text.push('('),
            Token::RParen => text.push(')'),
        }
    }
    text
}
