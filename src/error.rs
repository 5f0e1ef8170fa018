//! Error types for ledger operations.
//!
//! Every failure mode is a distinct variant carrying the data a caller needs
//! to pick a different input and retry. No failure corrupts ledger state.

use chrono::NaiveDateTime;

use crate::models::Slot;

/// Result type for ledger operations.
pub type BookingResult<T> = Result<T, BookingError>;

/// Error type for ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Slot duration was zero or negative at construction.
    #[error("slot duration must be a positive number of minutes, got: {minutes}")]
    InvalidDuration { minutes: i64 },

    /// Requested instant could not be turned into a well-formed timestamp,
    /// or the requested slot end is not representable.
    #[error("invalid slot request '{value}': {reason}")]
    InvalidRequest { value: String, reason: String },

    /// Requested start is strictly earlier than the clock's current time.
    #[error("cannot book a slot in the past: requested {requested}, current time {now}")]
    BookingInPast {
        requested: NaiveDateTime,
        now: NaiveDateTime,
    },

    /// Requested interval overlaps one or more existing bookings.
    /// `conflicts` holds every stored slot that intersects the request.
    #[error("slot from {} to {} is already booked ({} conflict(s))", .requested.start, .requested.end, .conflicts.len())]
    SlotUnavailable {
        requested: Slot,
        conflicts: Vec<Slot>,
    },
}

impl BookingError {
    /// Create an invalid-request error from any displayable offending value.
    pub fn invalid_request(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
