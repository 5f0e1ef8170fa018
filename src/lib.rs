//! # Turf Booking
//!
//! In-memory booking ledger for a single resource divided into
//! fixed-duration time slots.
//!
//! The crate tracks accepted bookings as half-open intervals and rejects
//! requests that are in the past or that overlap an existing booking,
//! reporting every conflicting slot so callers can pick a new time.
//!
//! ## Features
//!
//! - **Availability checks**: side-effect-free overlap scan with the full
//!   conflict list on failure
//! - **Booking**: validate, past-check, conflict-check, append as one
//!   synchronous call
//! - **Listing**: chronologically sorted copy of all accepted bookings
//! - **Deterministic time**: injectable [`Clock`] seam for fixing "now" in
//!   tests
//! - **Configuration**: slot length from `turf.toml` or the environment
//!
//! ## Architecture
//!
//! - [`models`]: the [`Slot`] interval type and overlap predicate
//! - [`ledger`]: the [`BookingLedger`] holding accepted bookings
//! - [`clock`]: the current-instant seam
//! - [`config`]: TOML/env configuration loading
//! - [`error`]: typed failure variants with diagnostic payloads
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use turf_booking::BookingLedger;
//!
//! let mut ledger = BookingLedger::new(30)?;
//! let start = NaiveDate::from_ymd_opt(2100, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//! let slot = ledger.book(start)?;
//! assert_eq!(slot.duration_minutes(), 30);
//! # Ok::<(), turf_booking::BookingError>(())
//! ```
//!
//! The ledger has no internal locking; embedders sharing one instance across
//! threads must serialize `book` calls externally.

pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, LedgerConfig};
pub use error::{BookingError, BookingResult};
pub use ledger::{parse_start, BookingLedger};
pub use models::Slot;
