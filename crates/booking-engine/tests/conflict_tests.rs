//! Tests for conflict detection against booked appointments.

use booking_engine::has_conflict;
use booking_engine::Appointment;
use chrono::{NaiveDate, NaiveTime};

/// Helper to create an appointment on a given date at `HH:MM` for `duration` minutes.
fn appt(year: i32, month: u32, day: u32, hour: u32, minute: u32, duration: u32) -> Appointment {
    Appointment::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        duration,
    )
}

#[test]
fn overlapping_appointments_conflict() {
    // Existing 10:00-10:30, candidate 10:15-10:45 → overlap
    let existing = vec![appt(2026, 1, 5, 10, 0, 30)];
    let candidate = appt(2026, 1, 5, 10, 15, 30);

    assert!(has_conflict(&candidate, &existing));
}

#[test]
fn disjoint_appointments_do_not_conflict() {
    let existing = vec![appt(2026, 1, 5, 9, 0, 60)];
    let candidate = appt(2026, 1, 5, 14, 0, 30);

    assert!(!has_conflict(&candidate, &existing));
}

#[test]
fn back_to_back_is_not_a_conflict() {
    // Existing 10:00-10:30; candidate starts exactly at 10:30.
    let existing = vec![appt(2026, 1, 5, 10, 0, 30)];
    let after = appt(2026, 1, 5, 10, 30, 30);
    assert!(
        !has_conflict(&after, &existing),
        "candidate starting when an appointment ends must not conflict"
    );

    // Candidate ends exactly at 10:00 when the existing one starts.
    let before = appt(2026, 1, 5, 9, 30, 30);
    assert!(
        !has_conflict(&before, &existing),
        "candidate ending when an appointment starts must not conflict"
    );
}

#[test]
fn candidate_containing_existing_conflicts() {
    // Candidate 09:00-12:00 fully contains existing 10:00-10:30.
    let existing = vec![appt(2026, 1, 5, 10, 0, 30)];
    let candidate = appt(2026, 1, 5, 9, 0, 180);

    assert!(has_conflict(&candidate, &existing));
}

#[test]
fn candidate_inside_existing_conflicts() {
    let existing = vec![appt(2026, 1, 5, 9, 0, 180)];
    let candidate = appt(2026, 1, 5, 10, 0, 30);

    assert!(has_conflict(&candidate, &existing));
}

#[test]
fn same_time_other_date_does_not_conflict() {
    // Identical time span on a different calendar date is skipped.
    let existing = vec![appt(2026, 1, 6, 10, 0, 30)];
    let candidate = appt(2026, 1, 5, 10, 0, 30);

    assert!(!has_conflict(&candidate, &existing));
}

#[test]
fn empty_appointment_list_never_conflicts() {
    let candidate = appt(2026, 1, 5, 10, 0, 30);
    assert!(!has_conflict(&candidate, &[]));
}

#[test]
fn any_one_overlap_in_a_busy_day_is_detected() {
    let existing = vec![
        appt(2026, 1, 5, 9, 0, 30),
        appt(2026, 1, 5, 11, 0, 30),
        appt(2026, 1, 5, 15, 0, 60),
    ];
    // Overlaps only the 15:00-16:00 appointment.
    let candidate = appt(2026, 1, 5, 15, 30, 60);

    assert!(has_conflict(&candidate, &existing));
}
