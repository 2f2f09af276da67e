use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the selection is empty or contains a zero.
pub fn validate_selection(numbers: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating selection: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Selection is empty");
        return Err(UtilsError::EmptySelection);
    }

    if numbers.contains(&0) {
        warn!("Selection contains a zero: {:?}", numbers);
        return Err(UtilsError::ZeroInSelection);
    }

    debug!("Selection validation successful");
    Ok(())
}
