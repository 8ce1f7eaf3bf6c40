//! Validate a candidate booking against recurring weekly availability rules.

use chrono::Datelike;

use crate::error::{BookingError, Result};
use crate::time::time_to_minutes;
use crate::types::{Appointment, AvailabilityRule};

/// Validate that the candidate lies fully inside at least one availability
/// rule for its weekday.
///
/// The candidate's date is projected to a weekday (pure civil-calendar
/// arithmetic, no timezone shift) and checked for containment —
/// `candidate.start >= rule.start && candidate.end <= rule.end` — against
/// every rule on that weekday. Rules are alternatives, not additive: a
/// candidate straddling two adjacent rules that together would cover it is
/// rejected, because it fits neither rule on its own.
///
/// # Errors
/// Returns `BookingError::OutsideBusinessHours` when no rule exists for the
/// weekday, or no single rule fully contains the candidate.
pub fn ensure_within_business_hours(
    candidate: &Appointment,
    rules: &[AvailabilityRule],
) -> Result<()> {
    let weekday = candidate.date.weekday();

    let contained = rules
        .iter()
        .filter(|rule| rule.weekday == weekday)
        .any(|rule| {
            candidate.start_minutes() >= time_to_minutes(rule.start)
                && candidate.end_minutes() <= time_to_minutes(rule.end)
        });

    if contained {
        Ok(())
    } else {
        Err(BookingError::OutsideBusinessHours)
    }
}
