//! Exhaustive numbers-round solver

mod core;
mod errors;
mod types;

pub use core::solve;
pub use errors::SolverError;
pub use types::{Solution, Solutions};

#[cfg(test)]
mod tests;
