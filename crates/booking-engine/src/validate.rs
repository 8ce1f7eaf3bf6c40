//! Past-date guard and the composed booking validation sequence.

use chrono::NaiveDate;

use crate::conflict::has_conflict;
use crate::error::{BookingError, Result};
use crate::exceptions::is_blocked;
use crate::hours::ensure_within_business_hours;
use crate::types::{Appointment, AvailabilityRule, BlockedException};

/// Reject dates before `today`.
///
/// Civil-date comparison only; time of day is ignored, so today always
/// passes. `today` is injected by the caller rather than read from the wall
/// clock, keeping the engine deterministic.
///
/// # Errors
/// Returns `BookingError::PastDate` when `date < today`.
pub fn ensure_not_past(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date < today {
        Err(BookingError::PastDate(date))
    } else {
        Ok(())
    }
}

/// Run the full validation sequence for a proposed booking.
///
/// Checks fail fast, first violation wins, in this order:
///
/// 1. past-date guard — `BookingError::PastDate`
/// 2. conflict detector — `BookingError::TimeConflict`
/// 3. business-hours validator — `BookingError::OutsideBusinessHours`
/// 4. exception checker — `BookingError::SlotUnavailable`
///
/// All inputs are a snapshot the caller read from storage; a conflicting
/// booking committed after that snapshot is invisible here, so the storage
/// layer must still enforce exclusion at commit time.
///
/// # Errors
/// The first violated rule's error, per the order above.
pub fn validate_booking(
    candidate: &Appointment,
    today: NaiveDate,
    rules: &[AvailabilityRule],
    existing: &[Appointment],
    exceptions: &[BlockedException],
) -> Result<()> {
    ensure_not_past(candidate.date, today)?;

    if has_conflict(candidate, existing) {
        return Err(BookingError::TimeConflict);
    }

    ensure_within_business_hours(candidate, rules)?;

    if is_blocked(candidate, exceptions) {
        return Err(BookingError::SlotUnavailable);
    }

    Ok(())
}
