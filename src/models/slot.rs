//! Booked time slots and the interval-overlap predicate.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)` held by the ledger.
///
/// The end instant is excluded, so two slots that merely touch
/// (one ends exactly when the other starts) do not overlap.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use turf_booking::Slot;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let morning = Slot::new(
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(9, 30, 0).unwrap(),
/// );
/// let next = Slot::new(
///     day.and_hms_opt(9, 30, 0).unwrap(),
///     day.and_hms_opt(10, 0, 0).unwrap(),
/// );
///
/// assert!(!morning.overlaps(&next));
/// assert_eq!(morning.duration_minutes(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Slot {
    /// Creates a new slot spanning `[start, end)`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns the slot length as a signed duration.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns the slot length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Returns `true` when this slot intersects `other`.
    ///
    /// Two half-open intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching endpoints are not an overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn slot_duration_helpers() {
        let slot = Slot::new(at(8, 0, 0), at(8, 45, 0));
        assert_eq!(slot.duration(), Duration::minutes(45));
        assert_eq!(slot.duration_minutes(), 45);
    }

    #[test]
    fn identical_slots_overlap() {
        let slot = Slot::new(at(9, 0, 0), at(9, 30, 0));
        assert!(slot.overlaps(&slot));
    }

    #[test]
    fn partial_overlap_detected_in_both_directions() {
        let a = Slot::new(at(9, 0, 0), at(9, 30, 0));
        let b = Slot::new(at(9, 15, 0), at(9, 45, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_slot_overlaps() {
        let outer = Slot::new(at(9, 0, 0), at(10, 0, 0));
        let inner = Slot::new(at(9, 15, 0), at(9, 30, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let a = Slot::new(at(9, 0, 0), at(9, 30, 0));
        let b = Slot::new(at(9, 30, 0), at(10, 0, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn one_second_overlap_detected() {
        let a = Slot::new(at(8, 30, 0), at(9, 0, 0));
        let b = Slot::new(at(8, 59, 59), at(9, 29, 59));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn disjoint_slots_do_not_overlap() {
        let a = Slot::new(at(7, 0, 0), at(7, 30, 0));
        let b = Slot::new(at(12, 0, 0), at(12, 30, 0));
        assert!(!a.overlaps(&b));
    }
}
