//! Value types shared across the engine.
//!
//! Everything here is a flat, immutable value object handed in fresh for each
//! decision. Nothing owns anything else and nothing is cached between calls.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::{format_slot_range, time_to_minutes};

/// A booked appointment, or a proposed candidate under evaluation.
///
/// Spans the half-open interval `[start, start + duration)` in minutes on a
/// single civil date. The end offset is deliberately NOT wrapped at midnight;
/// wrapping is a display concern (see [`crate::time::appointment_end_time`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_minutes: u32,
}

impl Appointment {
    pub fn new(date: NaiveDate, start: NaiveTime, duration_minutes: u32) -> Self {
        Appointment {
            date,
            start,
            duration_minutes,
        }
    }

    /// Start offset in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        time_to_minutes(self.start)
    }

    /// End offset in minutes since midnight, unwrapped (may exceed 1439).
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes() + self.duration_minutes
    }

    /// Half-open overlap test against another minute range on the same date.
    ///
    /// Two ranges overlap iff `self.start < other.end && other.start < self.end`.
    /// Back-to-back ranges (one ends exactly when the other starts) do NOT
    /// overlap.
    pub fn overlaps_range(&self, other_start: u32, other_end: u32) -> bool {
        self.start_minutes() < other_end && self.end_minutes() > other_start
    }
}

/// One recurring weekly open window for a provider.
///
/// Multiple rules may exist for the same weekday; they are independent
/// alternatives and are never merged. `start < end` is the caller's
/// responsibility — a malformed rule yields no slots rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl AvailabilityRule {
    pub fn new(weekday: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        AvailabilityRule {
            weekday,
            start,
            end,
        }
    }
}

/// An ad-hoc availability override for one specific date.
///
/// With no time range, the whole date is blocked (holiday). With both times
/// present, only that sub-range `[start, end)` is blocked. No recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedException {
    pub date: NaiveDate,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl BlockedException {
    /// Block an entire date.
    pub fn whole_day(date: NaiveDate) -> Self {
        BlockedException {
            date,
            start: None,
            end: None,
        }
    }

    /// Block only `[start, end)` on the given date.
    pub fn time_range(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        BlockedException {
            date,
            start: Some(start),
            end: Some(end),
        }
    }
}

/// A bookable window of exactly the requested service duration.
///
/// Output-only: produced by the slot generator for display/booking, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        TimeSlot { start, end }
    }

    pub fn duration_minutes(&self) -> u32 {
        time_to_minutes(self.end) - time_to_minutes(self.start)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_slot_range(self.start, self.end))
    }
}
