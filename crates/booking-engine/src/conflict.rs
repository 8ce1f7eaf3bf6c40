//! Detect overlap between a candidate booking and existing appointments.
//!
//! Intervals are half-open `[start, end)`: back-to-back appointments, where
//! one ends exactly when another starts, are NOT conflicts.

use crate::types::Appointment;

/// Returns `true` when the candidate overlaps any existing appointment on the
/// same date.
///
/// Linear scan with first-match short-circuit — only the existence of a
/// conflict is reported, never which appointment caused it. Appointments on
/// other dates are skipped. Two spans overlap when
/// `candidate.start < existing.end && existing.start < candidate.end`,
/// which excludes the adjacent case where one ends as the other begins.
pub fn has_conflict(candidate: &Appointment, existing: &[Appointment]) -> bool {
    existing.iter().any(|booked| {
        booked.date == candidate.date
            && candidate.overlaps_range(booked.start_minutes(), booked.end_minutes())
    })
}
