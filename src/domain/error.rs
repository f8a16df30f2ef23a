//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

use super::{BookingId, SeatCategory, ShowId};

/// Ledger errors
///
/// Every variant is an expected outcome of user input. None of them leave
/// the ledger partially mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested more seats than the category currently has available
    #[error("Not enough {category} seats available for show {show_id}: requested {requested}, available {available}")]
    InsufficientSeats {
        show_id: ShowId,
        category: SeatCategory,
        requested: u32,
        available: u32,
    },

    /// Show not found
    #[error("Show not found: {0}")]
    ShowNotFound(ShowId),

    /// Booking not found
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// Returning seats would push a pool above its original capacity.
    /// Unreachable through the ledger while its accounting holds.
    #[error("Returning {returned} {category} seats to show {show_id} exceeds capacity {capacity}")]
    CapacityExceeded {
        show_id: ShowId,
        category: SeatCategory,
        returned: u32,
        capacity: u32,
    },
}

impl DomainError {
    /// Create an insufficient seats error
    pub fn insufficient_seats(
        show_id: ShowId,
        category: SeatCategory,
        requested: u32,
        available: u32,
    ) -> Self {
        Self::InsufficientSeats {
            show_id,
            category,
            requested,
            available,
        }
    }

    /// Unknown show or booking id
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ShowNotFound(_) | Self::BookingNotFound(_))
    }

    /// Check if this is a client error (caused by the request)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::CapacityExceeded { .. })
    }
}
