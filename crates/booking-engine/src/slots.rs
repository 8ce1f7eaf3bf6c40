//! Generate the bookable time slots for one day.
//!
//! Walks every availability rule matching the day's weekday, quantizes it
//! into candidate windows of the requested service duration, and keeps the
//! candidates that are simultaneously conflict-free and not blocked.

use chrono::{Datelike, NaiveDate};

use crate::conflict::has_conflict;
use crate::exceptions::is_blocked;
use crate::time::{minutes_to_time, time_to_minutes};
use crate::types::{Appointment, AvailabilityRule, BlockedException, TimeSlot};

/// Enumerate the open slots on `date` for a service of
/// `service_duration_minutes`, offered at `interval_minutes` spacing.
///
/// For each rule matching the date's weekday, in rule order, a cursor walks
/// from the rule's start to `rule.end - duration` inclusive in steps of
/// `interval_minutes`; every position yields a candidate of exactly the
/// service duration, kept iff it passes both [`has_conflict`] (false) and
/// [`is_blocked`] (false).
///
/// The output order is part of the contract: rule order first, then
/// chronological within a rule. Rules are never merged or deduplicated, so
/// overlapping rules may produce duplicate or overlapping slots; callers
/// wanting a sorted/deduplicated view must post-process.
///
/// Never errors. No rule for the weekday, a rule too short for the service,
/// a rule with `start >= end`, or a zero interval/duration all yield no slots
/// rather than a failure — an empty day is expected, not exceptional.
pub fn available_slots(
    date: NaiveDate,
    interval_minutes: u32,
    service_duration_minutes: u32,
    rules: &[AvailabilityRule],
    existing: &[Appointment],
    exceptions: &[BlockedException],
) -> Vec<TimeSlot> {
    // A zero step would never advance the cursor; a zero-length service is
    // not a bookable thing. Neither can produce a meaningful slot.
    if interval_minutes == 0 || service_duration_minutes == 0 {
        return Vec::new();
    }

    let weekday = date.weekday();
    let mut slots = Vec::new();

    for rule in rules.iter().filter(|rule| rule.weekday == weekday) {
        let rule_start = time_to_minutes(rule.start);
        let rule_end = time_to_minutes(rule.end);

        // Covers both malformed rules (start >= end) and windows shorter
        // than the service itself.
        if rule_start + service_duration_minutes > rule_end {
            continue;
        }

        let mut current = rule_start;
        while current + service_duration_minutes <= rule_end {
            let candidate = Appointment::new(
                date,
                minutes_to_time(current),
                service_duration_minutes,
            );

            if !has_conflict(&candidate, existing) && !is_blocked(&candidate, exceptions) {
                slots.push(TimeSlot::new(
                    candidate.start,
                    minutes_to_time(current + service_duration_minutes),
                ));
            }

            current += interval_minutes;
        }
    }

    slots
}

/// First open slot of the day, if any.
///
/// Delegates to [`available_slots`]; the first slot in enumeration order is
/// the earliest offer from the earliest-listed rule.
pub fn first_available_slot(
    date: NaiveDate,
    interval_minutes: u32,
    service_duration_minutes: u32,
    rules: &[AvailabilityRule],
    existing: &[Appointment],
    exceptions: &[BlockedException],
) -> Option<TimeSlot> {
    available_slots(
        date,
        interval_minutes,
        service_duration_minutes,
        rules,
        existing,
        exceptions,
    )
    .into_iter()
    .next()
}
