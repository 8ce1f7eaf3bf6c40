//! Check candidates against ad-hoc blocked exceptions (holidays, time off).

use crate::time::time_to_minutes;
use crate::types::{Appointment, BlockedException};

/// Returns `true` when any exception blocks the candidate.
///
/// Only exceptions on the candidate's exact date are considered. An exception
/// without a time range blocks the entire date regardless of the candidate's
/// time. A ranged exception blocks the candidate iff their half-open
/// `[start, end)` spans overlap — the same test as the conflict detector, so
/// a candidate ending exactly when a block starts is NOT blocked.
///
/// First blocking match wins; exceptions are never merged or normalized.
pub fn is_blocked(candidate: &Appointment, exceptions: &[BlockedException]) -> bool {
    exceptions
        .iter()
        .filter(|exception| exception.date == candidate.date)
        .any(|exception| match (exception.start, exception.end) {
            (Some(block_start), Some(block_end)) => candidate
                .overlaps_range(time_to_minutes(block_start), time_to_minutes(block_end)),
            // No time range: the whole date is blocked.
            _ => true,
        })
}
