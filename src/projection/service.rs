//! Projection Service
//!
//! Read models built from the ledger for the presentation layer. Prices are
//! derived here from the booking's category and seat count.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{BookingId, SeatCategory, ShowId};
use crate::ledger::SharedLedger;

/// One line of the booking history view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingHistoryEntry {
    pub booking_id: BookingId,
    pub show_id: ShowId,
    pub title: String,
    pub venue: String,
    pub starts_at: NaiveDateTime,
    pub category: SeatCategory,
    pub seats: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub booked_at: DateTime<Utc>,
}

/// Seat availability summary for one show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowAvailability {
    pub show_id: ShowId,
    pub title: String,
    pub regular_available: u32,
    pub regular_booked: u32,
    pub premium_available: u32,
    pub premium_booked: u32,
    pub sold_out: bool,
}

/// Projection Service for read models
#[derive(Debug, Clone)]
pub struct ProjectionService {
    ledger: SharedLedger,
}

impl ProjectionService {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Active bookings joined with their show, in booking order
    pub fn booking_history(&self) -> Vec<BookingHistoryEntry> {
        self.ledger.read(|ledger| {
            ledger
                .list_bookings()
                .into_iter()
                .filter_map(|booking| {
                    let show = match ledger.get_show(booking.show_id()) {
                        Ok(show) => show,
                        Err(e) => {
                            tracing::warn!(booking_id = %booking.id(), "Skipping history entry: {}", e);
                            return None;
                        }
                    };
                    let category = booking.category();
                    Some(BookingHistoryEntry {
                        booking_id: booking.id(),
                        show_id: show.id().clone(),
                        title: show.title().to_string(),
                        venue: show.venue().to_string(),
                        starts_at: show.starts_at(),
                        category,
                        seats: booking.seats().value(),
                        unit_price: category.unit_price(),
                        total_price: category.price_for(booking.seats()),
                        booked_at: booking.booked_at(),
                    })
                })
                .collect()
        })
    }

    /// Sum of the prices of history entries
    pub fn total_price(entries: &[BookingHistoryEntry]) -> Decimal {
        entries.iter().map(|e| e.total_price).sum()
    }

    /// Per-show seat summary in show order
    pub fn availability(&self) -> Vec<ShowAvailability> {
        self.ledger
            .list_shows()
            .into_iter()
            .map(|show| ShowAvailability {
                show_id: show.id().clone(),
                title: show.title().to_string(),
                regular_available: show.available(SeatCategory::Regular),
                regular_booked: show.booked(SeatCategory::Regular),
                premium_available: show.available(SeatCategory::Premium),
                premium_booked: show.booked(SeatCategory::Premium),
                sold_out: show.is_sold_out(),
            })
            .collect()
    }
}
