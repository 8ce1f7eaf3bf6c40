//! Interval arithmetic over minutes-since-midnight.
//!
//! All schedule math in this crate works on whole minutes within a single
//! civil day. Conversions here never validate against business rules; they
//! only move between `NaiveTime` and minute offsets.

use chrono::{NaiveTime, Timelike};

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Minutes since midnight for a time of day (0..=1439).
pub fn time_to_minutes(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Build a time of day from a minute offset, wrapping modulo one day.
///
/// Inputs past 1439 wrap around midnight, so `minutes_to_time(1470)` is
/// `00:30`. Used for display of appointments that run past midnight.
pub fn minutes_to_time(minutes: u32) -> NaiveTime {
    let m = minutes % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(m / 60, m % 60, 0)
        .expect("minute offset wrapped to < 1440 is a valid time of day")
}

/// End time of an appointment, wrapping past midnight.
///
/// Display-only: conflict and availability checks never consult a wrapped
/// end time, they stay in unwrapped minute offsets on a single date.
pub fn appointment_end_time(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
    minutes_to_time(time_to_minutes(start) + duration_minutes)
}

/// Render a slot range as `"HH:MM - HH:MM"` for end-user display.
pub fn format_slot_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}
