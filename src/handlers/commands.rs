//! Command definitions
//!
//! Commands carry raw caller input. Handlers validate it into domain types
//! before the ledger sees it.

use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingId, Show};

// =========================================================================
// BookSeatsCommand
// =========================================================================

/// Command to reserve seats for a show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSeatsCommand {
    pub show_id: String,
    /// Category label (`regular` or `premium`)
    pub category: String,
    /// Requested seats, validated to be positive
    pub seats: i64,
}

impl BookSeatsCommand {
    pub fn new(show_id: impl Into<String>, category: impl Into<String>, seats: i64) -> Self {
        Self {
            show_id: show_id.into(),
            category: category.into(),
            seats,
        }
    }
}

// =========================================================================
// CancelBookingCommand
// =========================================================================

/// Command to cancel an active booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingCommand {
    pub booking_id: u64,
}

impl CancelBookingCommand {
    pub fn new(booking_id: u64) -> Self {
        Self { booking_id }
    }
}

/// Result of a successful booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSeatsResult {
    pub booking: Booking,
    /// The show as it stood right after the booking
    pub show: Show,
    pub message: String,
}

/// Result of a successful cancellation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingResult {
    pub booking_id: BookingId,
    /// The show with the returned seats
    pub show: Show,
    pub message: String,
}
