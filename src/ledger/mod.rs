//! Booking Ledger
//!
//! The ledger is the only owner of shows and bookings. Every seat it hands
//! out is recorded in exactly one booking, so for each show and category
//! `available + booked == capacity` holds between calls.

mod seed;
mod shared;

pub use seed::demo_shows;
pub use shared::SharedLedger;

use indexmap::IndexMap;

use crate::domain::{Booking, BookingId, DomainError, SeatCategory, SeatCount, Show, ShowId};

/// Seat accounting mismatch found by `Ledger::check_invariants`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Seat accounting mismatch for show {show_id} ({category}): available {available} + booked {booked} != capacity {capacity}")]
pub struct AccountingMismatch {
    pub show_id: ShowId,
    pub category: SeatCategory,
    pub available: u32,
    pub booked: u64,
    pub capacity: u32,
}

/// In-memory seat inventory and booking list.
///
/// All methods run to completion without suspending. Wrap the ledger in a
/// `SharedLedger` when more than one caller needs it.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Shows in creation order
    shows: IndexMap<ShowId, Show>,
    /// Active bookings in insertion order
    bookings: Vec<Booking>,
    next_booking_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Empty ledger with no shows
    pub fn new() -> Self {
        Self {
            shows: IndexMap::new(),
            bookings: Vec::new(),
            next_booking_id: 1,
        }
    }

    /// Ledger seeded with a fixed set of shows.
    ///
    /// Ids must be unique; a repeated id keeps the first show. A new ledger
    /// holds no bookings, so a show with seats already taken is skipped.
    pub fn with_shows(shows: impl IntoIterator<Item = Show>) -> Self {
        let mut ledger = Self::new();
        for show in shows {
            if ledger.shows.contains_key(show.id()) {
                tracing::warn!(show_id = %show.id(), "Duplicate show id in seed, skipping");
                continue;
            }
            if !show.is_untouched() {
                tracing::warn!(
                    show_id = %show.id(),
                    "Seed show has seats taken without bookings, skipping"
                );
                continue;
            }
            ledger.shows.insert(show.id().clone(), show);
        }
        ledger
    }

    /// Ledger seeded with the demo catalogue
    pub fn seeded() -> Self {
        Self::with_shows(demo_shows())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Reserve `seats` seats of `category` for a show.
    ///
    /// # Errors
    /// - `DomainError::ShowNotFound` if the show does not exist
    /// - `DomainError::InsufficientSeats` if the pool has fewer seats left
    ///
    /// The ledger is unchanged on error.
    pub fn book(
        &mut self,
        show_id: &ShowId,
        category: SeatCategory,
        seats: SeatCount,
    ) -> Result<Booking, DomainError> {
        let show = self
            .shows
            .get_mut(show_id)
            .ok_or_else(|| DomainError::ShowNotFound(show_id.clone()))?;

        let remaining = show.reserve(category, seats)?;

        let booking = Booking::new(self.issue_booking_id(), show_id.clone(), category, seats);
        self.bookings.push(booking.clone());

        tracing::debug!(
            booking_id = %booking.id(),
            show_id = %show_id,
            category = %category,
            seats = seats.value(),
            remaining,
            "Seats booked"
        );

        Ok(booking)
    }

    /// Cancel a booking and return its seats to the show.
    ///
    /// Returns the show with its updated counts.
    ///
    /// # Errors
    /// - `DomainError::BookingNotFound` if no active booking has this id
    pub fn cancel(&mut self, booking_id: BookingId) -> Result<Show, DomainError> {
        let position = self
            .bookings
            .iter()
            .position(|b| b.id() == booking_id)
            .ok_or(DomainError::BookingNotFound(booking_id))?;

        let booking = &self.bookings[position];
        let show = self
            .shows
            .get_mut(booking.show_id())
            .ok_or_else(|| DomainError::ShowNotFound(booking.show_id().clone()))?;

        let restored = show.release(booking.category(), booking.seats())?;
        let show = show.clone();
        let booking = self.bookings.remove(position);

        tracing::debug!(
            booking_id = %booking_id,
            show_id = %booking.show_id(),
            category = %booking.category(),
            seats = booking.seats().value(),
            available = restored,
            "Booking canceled"
        );

        Ok(show)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All shows in creation order
    pub fn list_shows(&self) -> Vec<Show> {
        self.shows.values().cloned().collect()
    }

    pub fn get_show(&self, show_id: &ShowId) -> Result<Show, DomainError> {
        self.shows
            .get(show_id)
            .cloned()
            .ok_or_else(|| DomainError::ShowNotFound(show_id.clone()))
    }

    /// Active bookings in the order they were made
    pub fn list_bookings(&self) -> Vec<Booking> {
        self.bookings.clone()
    }

    /// Sum of seats held by active bookings for one show and category
    pub fn booked_seats(&self, show_id: &ShowId, category: SeatCategory) -> u64 {
        self.bookings
            .iter()
            .filter(|b| b.show_id() == show_id && b.category() == category)
            .map(|b| u64::from(b.seats().value()))
            .sum()
    }

    /// Verify that no seat was created or lost across all shows.
    pub fn check_invariants(&self) -> Result<(), AccountingMismatch> {
        for show in self.shows.values() {
            for category in SeatCategory::ALL {
                let available = show.available(category);
                let booked = self.booked_seats(show.id(), category);
                let capacity = show.capacity(category);
                if u64::from(available) + booked != u64::from(capacity) {
                    return Err(AccountingMismatch {
                        show_id: show.id().clone(),
                        category,
                        available,
                        booked,
                        capacity,
                    });
                }
            }
        }
        Ok(())
    }

    fn issue_booking_id(&mut self) -> BookingId {
        let id = BookingId::new(self.next_booking_id);
        self.next_booking_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(n: i64) -> SeatCount {
        SeatCount::new(n).unwrap()
    }

    fn s001() -> ShowId {
        ShowId::new("s001")
    }

    #[test]
    fn test_seeded_shows_in_creation_order() {
        let ledger = Ledger::seeded();
        let ids: Vec<String> = ledger
            .list_shows()
            .iter()
            .map(|s| s.id().to_string())
            .collect();

        assert_eq!(ids, vec!["s001", "s002", "s003", "s004"]);
        assert!(ledger.list_bookings().is_empty());
    }

    #[test]
    fn test_book_then_insufficient_then_cancel() {
        let mut ledger = Ledger::seeded();

        let booking = ledger.book(&s001(), SeatCategory::Regular, seats(5)).unwrap();
        assert_eq!(booking.seats().value(), 5);
        assert_eq!(booking.category(), SeatCategory::Regular);
        assert_eq!(ledger.get_show(&s001()).unwrap().available(SeatCategory::Regular), 95);
        assert_eq!(ledger.list_bookings().len(), 1);

        let result = ledger.book(&s001(), SeatCategory::Premium, seats(60));
        assert_eq!(
            result,
            Err(DomainError::insufficient_seats(s001(), SeatCategory::Premium, 60, 50))
        );
        let show = ledger.get_show(&s001()).unwrap();
        assert_eq!(show.available(SeatCategory::Premium), 50);
        assert_eq!(show.available(SeatCategory::Regular), 95);
        assert_eq!(ledger.list_bookings().len(), 1);

        let show = ledger.cancel(booking.id()).unwrap();
        assert_eq!(show.available(SeatCategory::Regular), 100);
        assert!(ledger.list_bookings().is_empty());
    }

    #[test]
    fn test_book_unknown_show() {
        let mut ledger = Ledger::seeded();

        let result = ledger.book(&ShowId::new("s999"), SeatCategory::Regular, seats(1));

        assert_eq!(result, Err(DomainError::ShowNotFound(ShowId::new("s999"))));
        assert!(ledger.list_bookings().is_empty());
    }

    #[test]
    fn test_cancel_unknown_booking_changes_nothing() {
        let mut ledger = Ledger::seeded();
        ledger.book(&s001(), SeatCategory::Premium, seats(3)).unwrap();
        let before = ledger.list_shows();

        let result = ledger.cancel(BookingId::new(999));

        assert_eq!(result, Err(DomainError::BookingNotFound(BookingId::new(999))));
        assert_eq!(ledger.list_shows(), before);
        assert_eq!(ledger.list_bookings().len(), 1);
    }

    #[test]
    fn test_cancel_twice_fails_second_time() {
        let mut ledger = Ledger::seeded();
        let booking = ledger.book(&s001(), SeatCategory::Premium, seats(3)).unwrap();

        ledger.cancel(booking.id()).unwrap();
        let again = ledger.cancel(booking.id());

        assert_eq!(again, Err(DomainError::BookingNotFound(booking.id())));
        assert_eq!(ledger.get_show(&s001()).unwrap().available(SeatCategory::Premium), 50);
    }

    #[test]
    fn test_booking_ids_are_unique_and_increasing() {
        let mut ledger = Ledger::seeded();

        let first = ledger.book(&s001(), SeatCategory::Regular, seats(1)).unwrap();
        let second = ledger.book(&s001(), SeatCategory::Regular, seats(1)).unwrap();
        ledger.cancel(second.id()).unwrap();
        let third = ledger.book(&s001(), SeatCategory::Regular, seats(1)).unwrap();

        assert!(first.id() < second.id());
        assert!(second.id() < third.id());
    }

    #[test]
    fn test_bookings_keep_insertion_order() {
        let mut ledger = Ledger::seeded();
        let a = ledger.book(&ShowId::new("s002"), SeatCategory::Regular, seats(1)).unwrap();
        let b = ledger.book(&s001(), SeatCategory::Premium, seats(2)).unwrap();
        let c = ledger.book(&ShowId::new("s003"), SeatCategory::Regular, seats(3)).unwrap();

        ledger.cancel(b.id()).unwrap();

        let ids: Vec<BookingId> = ledger.list_bookings().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![a.id(), c.id()]);
    }

    #[test]
    fn test_round_trip_restores_counts() {
        let mut ledger = Ledger::seeded();
        ledger.book(&s001(), SeatCategory::Regular, seats(7)).unwrap();
        let before = ledger.list_shows();

        let booking = ledger.book(&s001(), SeatCategory::Regular, seats(13)).unwrap();
        ledger.cancel(booking.id()).unwrap();

        assert_eq!(ledger.list_shows(), before);
    }

    #[test]
    fn test_returned_copies_do_not_alias_ledger() {
        let mut ledger = Ledger::seeded();
        let mut copy = ledger.get_show(&s001()).unwrap();

        copy.reserve(SeatCategory::Regular, seats(100)).unwrap();

        assert_eq!(ledger.get_show(&s001()).unwrap().available(SeatCategory::Regular), 100);
        assert!(ledger.book(&s001(), SeatCategory::Regular, seats(100)).is_ok());
    }

    #[test]
    fn test_invariants_hold_across_mixed_operations() {
        let mut ledger = Ledger::seeded();
        let shows = ["s001", "s002", "s003", "s004"];
        let mut held = Vec::new();

        for round in 0..200i64 {
            let show_id = ShowId::new(shows[(round % 4) as usize]);
            let category = if round % 3 == 0 {
                SeatCategory::Premium
            } else {
                SeatCategory::Regular
            };
            match ledger.book(&show_id, category, seats(round % 9 + 1)) {
                Ok(booking) => held.push(booking.id()),
                Err(e) => assert!(matches!(e, DomainError::InsufficientSeats { .. })),
            }
            if round % 5 == 0 {
                if let Some(id) = held.pop() {
                    ledger.cancel(id).unwrap();
                }
            }
            assert_eq!(ledger.check_invariants(), Ok(()));
        }

        for id in held {
            ledger.cancel(id).unwrap();
        }
        assert_eq!(Ledger::seeded().list_shows(), ledger.list_shows());
    }

    #[test]
    fn test_duplicate_seed_ids_keep_first() {
        let mut shows = demo_shows();
        let first_title = shows[0].title().to_string();
        shows.push(shows[0].clone().with_genre("Duplicate"));

        let ledger = Ledger::with_shows(shows);

        assert_eq!(ledger.list_shows().len(), 4);
        assert_eq!(ledger.get_show(&s001()).unwrap().title(), first_title);
        assert_ne!(ledger.get_show(&s001()).unwrap().genre(), "Duplicate");
    }

    #[test]
    fn test_seed_skips_show_with_seats_already_taken() {
        let mut shows = demo_shows();
        let mut taken = shows.remove(1);
        taken.reserve(SeatCategory::Regular, seats(4)).unwrap();
        shows.push(taken);

        let ledger = Ledger::with_shows(shows);

        let ids: Vec<String> = ledger.list_shows().iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["s001", "s003", "s004"]);
        assert_eq!(ledger.get_show(&ShowId::new("s002")), Err(DomainError::ShowNotFound(ShowId::new("s002"))));
        assert_eq!(ledger.check_invariants(), Ok(()));
    }
}
