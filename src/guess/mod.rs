//! Guess handling: normalization, parsing and validation of free-text
//! arithmetic expressions against an available selection

mod core;
mod errors;
mod normalize;
mod parse;

pub use core::validate;
pub use errors::GuessError;
pub use normalize::normalize;

pub(crate) use parse::{Token, tokenize};
