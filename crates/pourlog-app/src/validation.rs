//! Submission validation for new orders
//!
//! Runs before any store write; a rejected order never touches the table.
//! Enum fields and the start time are already well-formed by the time a
//! record exists, so only presence and range rules are checked here.

use chrono::NaiveDate;

use pourlog_domain::model::OrderRecord;
use pourlog_types::ValidationError;

/// Validate a new order submission against `today`.
///
/// The entry form only offers dates from today onwards; past-dated and
/// undated submissions are rejected the same way.
pub fn validate_submission(
    record: &OrderRecord,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    let Some(date) = record.date else {
        return Err(ValidationError::MissingDate);
    };
    if date < today {
        return Err(ValidationError::DateInPast(date));
    }

    if record.ordered_m3.is_nan() || record.ordered_m3 < 0.0 {
        return Err(ValidationError::NegativeOrdered(record.ordered_m3));
    }
    if record.actual_m3.is_nan() || record.actual_m3 < 0.0 {
        return Err(ValidationError::NegativeActual(record.actual_m3));
    }

    Ok(())
}
