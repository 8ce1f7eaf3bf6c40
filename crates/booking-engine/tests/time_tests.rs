//! Tests for minute arithmetic and display helpers.

use booking_engine::time::{
    appointment_end_time, format_slot_range, minutes_to_time, time_to_minutes,
};
use booking_engine::TimeSlot;
use chrono::NaiveTime;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn minutes_round_trip_within_a_day() {
    assert_eq!(time_to_minutes(time(0, 0)), 0);
    assert_eq!(time_to_minutes(time(9, 30)), 570);
    assert_eq!(time_to_minutes(time(23, 59)), 1439);

    assert_eq!(minutes_to_time(0), time(0, 0));
    assert_eq!(minutes_to_time(570), time(9, 30));
    assert_eq!(minutes_to_time(1439), time(23, 59));
}

#[test]
fn minutes_past_midnight_wrap() {
    assert_eq!(minutes_to_time(1440), time(0, 0));
    assert_eq!(minutes_to_time(1470), time(0, 30));
    // Two full days plus an hour.
    assert_eq!(minutes_to_time(2 * 1440 + 60), time(1, 0));
}

#[test]
fn end_time_within_the_day() {
    assert_eq!(appointment_end_time(time(9, 0), 30), time(9, 30));
    assert_eq!(appointment_end_time(time(11, 45), 75), time(13, 0));
}

#[test]
fn end_time_crossing_midnight_wraps_for_display() {
    // A 90-minute appointment starting at 23:00 displays as ending 00:30.
    assert_eq!(appointment_end_time(time(23, 0), 90), time(0, 30));
    assert_eq!(appointment_end_time(time(23, 59), 1), time(0, 0));
}

#[test]
fn slot_range_formats_as_hh_mm_pair() {
    assert_eq!(format_slot_range(time(9, 0), time(9, 30)), "09:00 - 09:30");
    assert_eq!(format_slot_range(time(23, 0), time(0, 30)), "23:00 - 00:30");
}

#[test]
fn time_slot_displays_like_format_slot_range() {
    let slot = TimeSlot::new(time(14, 0), time(15, 0));

    assert_eq!(slot.to_string(), "14:00 - 15:00");
    assert_eq!(slot.duration_minutes(), 60);
}
