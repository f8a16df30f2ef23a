//! Projection module
//!
//! Read-model views over the ledger (CQRS query side).

mod service;

pub use service::{BookingHistoryEntry, ProjectionService, ShowAvailability};
