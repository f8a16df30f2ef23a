//! Domain module
//!
//! Core domain types and business rules.

pub mod booking;
pub mod context;
pub mod error;
pub mod seats;
pub mod show;

pub use booking::{Booking, BookingId};
pub use context::OperationContext;
pub use error::DomainError;
pub use seats::{SeatCategory, SeatCount, SeatInputError, SeatPools};
pub use show::{InvalidSeatPools, Show, ShowId};
