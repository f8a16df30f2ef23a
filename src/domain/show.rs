//! Show entity
//!
//! A single scheduled screening with its own seat inventory. Seat counts
//! change only through `reserve` and `release`, which keep every pool
//! between zero and its original capacity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DomainError, SeatCategory, SeatCount, SeatPools};

/// Unique show identifier (e.g. `s001`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(String);

impl ShowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Seat pools that could not have come from a valid show
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Show {show_id} has {available} {category} seats available but a capacity of {capacity}")]
pub struct InvalidSeatPools {
    pub show_id: ShowId,
    pub category: SeatCategory,
    pub available: u32,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShowRecord")]
pub struct Show {
    id: ShowId,
    title: String,
    venue: String,
    genre: String,
    duration_minutes: u32,
    starts_at: NaiveDateTime,
    /// Seats that can still be booked
    available_seats: SeatPools,
    /// Pools as they were when the show was created
    capacity: SeatPools,
}

/// Wire form of `Show`, checked before it becomes one
#[derive(Deserialize)]
struct ShowRecord {
    id: ShowId,
    title: String,
    venue: String,
    genre: String,
    duration_minutes: u32,
    starts_at: NaiveDateTime,
    available_seats: SeatPools,
    capacity: SeatPools,
}

impl TryFrom<ShowRecord> for Show {
    type Error = InvalidSeatPools;

    fn try_from(record: ShowRecord) -> Result<Self, Self::Error> {
        for category in SeatCategory::ALL {
            let available = record.available_seats.get(category);
            let capacity = record.capacity.get(category);
            if available > capacity {
                return Err(InvalidSeatPools {
                    show_id: record.id,
                    category,
                    available,
                    capacity,
                });
            }
        }

        Ok(Self {
            id: record.id,
            title: record.title,
            venue: record.venue,
            genre: record.genre,
            duration_minutes: record.duration_minutes,
            starts_at: record.starts_at,
            available_seats: record.available_seats,
            capacity: record.capacity,
        })
    }
}

impl Show {
    /// Create a show with every seat available
    pub fn new(
        id: impl Into<ShowId>,
        title: impl Into<String>,
        venue: impl Into<String>,
        starts_at: NaiveDateTime,
        capacity: SeatPools,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            venue: venue.into(),
            genre: String::new(),
            duration_minutes: 0,
            starts_at,
            available_seats: capacity,
            capacity,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Take seats out of a category pool.
    ///
    /// Returns the seats left in the pool. Fails with
    /// `DomainError::InsufficientSeats` without touching the pool when the
    /// request exceeds what is available.
    pub(crate) fn reserve(&mut self, category: SeatCategory, seats: SeatCount) -> Result<u32, DomainError> {
        self.available_seats.take(category, seats).map_err(|available| {
            DomainError::insufficient_seats(self.id.clone(), category, seats.value(), available)
        })
    }

    /// Return seats to a category pool.
    ///
    /// Returns the seats now available. A pool never grows past its
    /// original capacity.
    pub(crate) fn release(&mut self, category: SeatCategory, seats: SeatCount) -> Result<u32, DomainError> {
        let capacity = self.capacity.get(category);
        self.available_seats
            .put_back(category, seats, capacity)
            .ok_or_else(|| DomainError::CapacityExceeded {
                show_id: self.id.clone(),
                category,
                returned: seats.value(),
                capacity,
            })
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &ShowId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.starts_at
    }

    pub fn available_seats(&self) -> &SeatPools {
        &self.available_seats
    }

    pub fn available(&self, category: SeatCategory) -> u32 {
        self.available_seats.get(category)
    }

    pub fn capacity(&self, category: SeatCategory) -> u32 {
        self.capacity.get(category)
    }

    /// Seats currently held by bookings in a category
    pub fn booked(&self, category: SeatCategory) -> u32 {
        self.capacity(category).saturating_sub(self.available(category))
    }

    /// True while no seat of any category is held
    pub fn is_untouched(&self) -> bool {
        self.available_seats == self.capacity
    }

    pub fn is_sold_out(&self) -> bool {
        self.available_seats.total() == 0
    }
}
