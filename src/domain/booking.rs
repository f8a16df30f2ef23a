//! Booking record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SeatCategory, SeatCount, ShowId};

/// Booking identifier, issued by the ledger from a monotonic counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seats reserved against one category of one show.
///
/// Only the ledger creates bookings, so callers always hold copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    show_id: ShowId,
    category: SeatCategory,
    seats: SeatCount,
    booked_at: DateTime<Utc>,
}

impl Booking {
    pub(crate) fn new(
        id: BookingId,
        show_id: ShowId,
        category: SeatCategory,
        seats: SeatCount,
    ) -> Self {
        Self {
            id,
            show_id,
            category,
            seats,
            booked_at: Utc::now(),
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn show_id(&self) -> &ShowId {
        &self.show_id
    }

    pub fn category(&self) -> SeatCategory {
        self.category
    }

    pub fn seats(&self) -> SeatCount {
        self.seats
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_serializes_category_label() {
        let booking = Booking::new(
            BookingId::new(7),
            ShowId::new("s002"),
            SeatCategory::Premium,
            SeatCount::new(2).unwrap(),
        );

        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["show_id"], "s002");
        assert_eq!(json["category"], "premium");
        assert_eq!(json["seats"], 2);
    }
}
