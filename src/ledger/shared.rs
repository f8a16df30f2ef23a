//! Shared ledger handle
//!
//! Serializes every mutation behind one write lock so the availability
//! check and the decrement inside `book` can never interleave with another
//! caller. Reads take the shared lock and return copies.

use parking_lot::RwLock;
use std::sync::Arc;

use super::Ledger;
use crate::domain::{Booking, BookingId, DomainError, SeatCategory, SeatCount, Show, ShowId};

#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    pub fn book(
        &self,
        show_id: &ShowId,
        category: SeatCategory,
        seats: SeatCount,
    ) -> Result<Booking, DomainError> {
        self.write(|ledger| ledger.book(show_id, category, seats))
    }

    pub fn cancel(&self, booking_id: BookingId) -> Result<Show, DomainError> {
        self.write(|ledger| ledger.cancel(booking_id))
    }

    pub fn list_shows(&self) -> Vec<Show> {
        self.inner.read().list_shows()
    }

    pub fn get_show(&self, show_id: &ShowId) -> Result<Show, DomainError> {
        self.inner.read().get_show(show_id)
    }

    pub fn list_bookings(&self) -> Vec<Booking> {
        self.inner.read().list_bookings()
    }

    /// Run a read-only closure against one consistent view of the ledger
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run several ledger calls as one step under the write lock
    pub fn write<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> R {
        let mut ledger = self.inner.write();
        let result = f(&mut ledger);
        debug_check(&ledger);
        result
    }
}

#[cfg(debug_assertions)]
fn debug_check(ledger: &Ledger) {
    if let Err(mismatch) = ledger.check_invariants() {
        tracing::error!(%mismatch, "Ledger invariant violated");
    }
}

#[cfg(not(debug_assertions))]
fn debug_check(_ledger: &Ledger) {}
