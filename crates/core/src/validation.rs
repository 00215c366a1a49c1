//! Input validation utilities.
//!
//! This module contains the checks applied to caller-supplied values before they are stored on a
//! record.

use crate::{PatientError, PatientResult};
use chrono::NaiveDate;

/// Validates that a stay ends strictly after it starts.
///
/// # Errors
///
/// Returns [`PatientError::InvalidDates`] if `discharge` is on or before `arrival`.
pub fn validate_stay(arrival: NaiveDate, discharge: NaiveDate) -> PatientResult<()> {
    if discharge <= arrival {
        return Err(PatientError::InvalidDates);
    }
    Ok(())
}
