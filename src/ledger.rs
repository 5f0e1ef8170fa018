//! The booking ledger: availability checking, slot booking, and listing.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use log::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{BookingError, BookingResult};
use crate::models::Slot;

/// Accepted textual timestamp formats for [`parse_start`].
const START_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a requested start instant from untyped text.
///
/// This is the boundary where malformed caller input becomes
/// [`BookingError::InvalidRequest`]; once a `NaiveDateTime` exists it is a
/// well-formed instant by construction.
///
/// # Examples
///
/// ```
/// use turf_booking::parse_start;
///
/// assert!(parse_start("2025-01-01 08:00:00").is_ok());
/// assert!(parse_start("2025-01-01T08:00:00").is_ok());
/// assert!(parse_start("eight o'clock").is_err());
/// ```
pub fn parse_start(raw: &str) -> BookingResult<NaiveDateTime> {
    for format in START_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(instant);
        }
    }
    Err(BookingError::invalid_request(
        raw,
        "expected a timestamp like '2025-01-01 08:00:00'",
    ))
}

/// In-memory ledger of accepted bookings for a single resource.
///
/// The ledger holds a fixed slot duration, set at construction, and a growing
/// collection of non-overlapping half-open slots. Bookings are never mutated
/// or removed; the collection grows for the lifetime of the instance.
///
/// The past-booking check reads "now" through the injected [`Clock`], so
/// tests can pin the current instant with
/// [`FixedClock`](crate::clock::FixedClock).
///
/// # Concurrency
///
/// `book` is a check-then-append sequence with no internal locking. Embedders
/// that share a ledger across threads must serialize all `book` calls on the
/// instance externally, or two concurrent calls can both pass the overlap
/// check and double-book.
pub struct BookingLedger {
    slot_duration: Duration,
    booked: Vec<Slot>,
    clock: Box<dyn Clock>,
}

impl BookingLedger {
    /// Creates an empty ledger with the given slot length, using the system
    /// clock for the past-booking check.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidDuration`] when `slot_minutes` is zero
    /// or negative.
    pub fn new(slot_minutes: i64) -> BookingResult<Self> {
        Self::with_clock(slot_minutes, Box::new(SystemClock))
    }

    /// Creates an empty ledger with an injected clock.
    pub fn with_clock(slot_minutes: i64, clock: Box<dyn Clock>) -> BookingResult<Self> {
        if slot_minutes <= 0 {
            return Err(BookingError::InvalidDuration {
                minutes: slot_minutes,
            });
        }
        let slot_duration = Duration::try_minutes(slot_minutes).ok_or(
            BookingError::InvalidDuration {
                minutes: slot_minutes,
            },
        )?;
        Ok(Self {
            slot_duration,
            booked: Vec::new(),
            clock,
        })
    }

    /// The fixed slot length in minutes.
    pub fn slot_minutes(&self) -> i64 {
        self.slot_duration.num_minutes()
    }

    /// Checks whether a slot starting at `requested_start` can be booked.
    ///
    /// Scans every existing booking with the half-open overlap predicate.
    /// Touching endpoints are not a conflict. Has no side effects.
    ///
    /// # Errors
    ///
    /// * [`BookingError::InvalidRequest`] when the slot end would fall outside
    ///   the representable time range.
    /// * [`BookingError::SlotUnavailable`] carrying every conflicting booking
    ///   when the requested interval overlaps at least one.
    pub fn check_availability(&self, requested_start: NaiveDateTime) -> BookingResult<()> {
        let requested = self.requested_slot(requested_start)?;
        let conflicts: Vec<Slot> = self
            .booked
            .iter()
            .filter(|slot| slot.overlaps(&requested))
            .copied()
            .collect();

        if conflicts.is_empty() {
            Ok(())
        } else {
            warn!(
                "slot {} - {} conflicts with {} existing booking(s)",
                requested.start,
                requested.end,
                conflicts.len()
            );
            Err(BookingError::SlotUnavailable {
                requested,
                conflicts,
            })
        }
    }

    /// Books the slot starting at `requested_start` and returns it.
    ///
    /// Checks run in order: request validation, past-booking check against
    /// the clock, then the availability scan. A request starting exactly at
    /// the current instant is accepted. Conflict errors propagate unchanged
    /// from [`check_availability`](Self::check_availability); booking performs
    /// no overlap logic of its own. A failed call leaves the ledger unchanged.
    pub fn book(&mut self, requested_start: NaiveDateTime) -> BookingResult<Slot> {
        let requested = self.requested_slot(requested_start)?;

        let now = self.clock.now();
        if requested_start < now {
            return Err(BookingError::BookingInPast {
                requested: requested_start,
                now,
            });
        }

        self.check_availability(requested_start)?;

        self.booked.push(requested);
        debug!("booked slot {} - {}", requested.start, requested.end);
        Ok(requested)
    }

    /// Returns every booking, sorted ascending by start time.
    ///
    /// The returned vector is a copy; listing never mutates the ledger and
    /// repeated calls without intervening bookings return equal results.
    pub fn bookings(&self) -> Vec<Slot> {
        let mut slots = self.booked.clone();
        slots.sort_by_key(|slot| slot.start);
        slots
    }

    fn requested_slot(&self, start: NaiveDateTime) -> BookingResult<Slot> {
        let end = start.checked_add_signed(self.slot_duration).ok_or_else(|| {
            BookingError::invalid_request(start, "slot end is outside the representable time range")
        })?;
        Ok(Slot::new(start, end))
    }
}

impl fmt::Debug for BookingLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingLedger")
            .field("slot_minutes", &self.slot_minutes())
            .field("booked", &self.booked)
            .finish()
    }
}
