//! Error types for booking-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

/// A business-rule violation raised by one of the booking validators.
///
/// This is the only error category the engine produces. Infrastructure
/// failures (storage, network) belong to the orchestration layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Cannot book a date in the past: {0}")]
    PastDate(NaiveDate),

    #[error("The requested time overlaps an existing appointment")]
    TimeConflict,

    #[error("The requested time falls outside the provider's business hours")]
    OutsideBusinessHours,

    #[error("The requested time is blocked and unavailable")]
    SlotUnavailable,
}

impl BookingError {
    /// Stable machine-readable code, used by callers to key user-facing
    /// messages across the API boundary.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::PastDate(_) => "BOOKING_PAST_DATE",
            BookingError::TimeConflict => "BOOKING_TIME_CONFLICT",
            BookingError::OutsideBusinessHours => "BOOKING_OUTSIDE_BUSINESS_HOURS",
            BookingError::SlotUnavailable => "BOOKING_SLOT_UNAVAILABLE",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
