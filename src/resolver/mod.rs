//! Composite-literal resolution in front of the guess validator

mod core;

pub use core::{check_guess, resolve};
