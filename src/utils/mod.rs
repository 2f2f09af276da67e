//! Utils module split into submodules

mod errors;
mod multiset;
mod validation;

pub use errors::UtilsError;
pub use multiset::{counts, distinct_combinations, multiset_difference};
pub use validation::validate_selection;
