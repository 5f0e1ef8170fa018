//! Domain models for the booking ledger.

mod slot;

pub use slot::Slot;
