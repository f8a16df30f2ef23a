//! Showtime Ledger Library
//!
//! Seat-inventory booking ledger for movie screenings, plus the HTTP layer
//! that exposes it. Re-exports modules for integration testing.

pub mod api;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod ledger;
pub mod projection;

mod error;

pub use config::Config;
pub use domain::{Booking, BookingId, DomainError, SeatCategory, SeatCount, Show, ShowId};
pub use error::{AppError, AppResult};
pub use ledger::{Ledger, SharedLedger};
