//! # booking-engine
//!
//! Scheduling-conflict engine for an appointment-booking platform.
//!
//! Given a provider's recurring weekly availability, the appointments already
//! on the books, and ad-hoc blocked exceptions (holidays, time off), the
//! engine answers one question: is this date + time + duration bookable?
//! It is a pure decision layer — no storage, no clock, no I/O — over
//! immutable snapshots the caller assembles per decision.
//!
//! ## Modules
//!
//! - [`time`] — minutes-since-midnight arithmetic and display helpers
//! - [`types`] — appointment, rule, exception, and slot value types
//! - [`conflict`] — overlap detection against booked appointments
//! - [`hours`] — business-hours validation over weekly availability rules
//! - [`exceptions`] — holiday / time-off blocklist checks
//! - [`slots`] — interval-quantized available-slot generation
//! - [`validate`] — past-date guard and the composed booking validation
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod exceptions;
pub mod hours;
pub mod slots;
pub mod time;
pub mod types;
pub mod validate;

pub use conflict::has_conflict;
pub use error::{BookingError, Result};
pub use exceptions::is_blocked;
pub use hours::ensure_within_business_hours;
pub use slots::{available_slots, first_available_slot};
pub use types::{Appointment, AvailabilityRule, BlockedException, TimeSlot};
pub use validate::{ensure_not_past, validate_booking};
