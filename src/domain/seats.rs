//! Seat primitives
//!
//! `SeatCategory` labels the two independent pools of a show, `SeatCount`
//! is a validated positive seat quantity and `SeatPools` holds one counter
//! per category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seat class with its own capacity pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatCategory {
    Regular,
    Premium,
}

impl SeatCategory {
    pub const ALL: [SeatCategory; 2] = [SeatCategory::Regular, SeatCategory::Premium];

    /// Label used on the wire and in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatCategory::Regular => "regular",
            SeatCategory::Premium => "premium",
        }
    }

    /// Price of a single seat in this category
    pub fn unit_price(&self) -> Decimal {
        match self {
            SeatCategory::Regular => Decimal::new(15, 0),
            SeatCategory::Premium => Decimal::new(25, 0),
        }
    }

    /// Total price for `seats` seats in this category
    pub fn price_for(&self, seats: SeatCount) -> Decimal {
        self.unit_price() * Decimal::from(seats.value())
    }
}

impl fmt::Display for SeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatCategory {
    type Err = SeatInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(SeatCategory::Regular),
            "premium" => Ok(SeatCategory::Premium),
            _ => Err(SeatInputError::UnknownCategory(s.to_string())),
        }
    }
}

/// Errors raised while turning raw input into seat primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatInputError {
    #[error("Seat count must be positive (got {0})")]
    NotPositive(i64),

    #[error("Seat count is too large (got {0})")]
    TooLarge(i64),

    #[error("Unknown seat category: {0}")]
    UnknownCategory(String),
}

/// A positive number of seats.
///
/// # Invariants
/// - Value is always >= 1
///
/// # Example
/// ```
/// use showtime_ledger::domain::SeatCount;
///
/// let seats = SeatCount::new(5).unwrap();
/// assert_eq!(seats.value(), 5);
/// assert!(SeatCount::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct SeatCount(u32);

impl SeatCount {
    /// Create a seat count with validation.
    ///
    /// # Errors
    /// - `SeatInputError::NotPositive` if value <= 0
    /// - `SeatInputError::TooLarge` if value does not fit a seat counter
    pub fn new(value: i64) -> Result<Self, SeatInputError> {
        if value <= 0 {
            return Err(SeatInputError::NotPositive(value));
        }
        let value = u32::try_from(value).map_err(|_| SeatInputError::TooLarge(value))?;
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for SeatCount {
    type Error = SeatInputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        SeatCount::new(value)
    }
}

impl From<SeatCount> for u32 {
    fn from(seats: SeatCount) -> Self {
        seats.0
    }
}

/// One seat counter per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatPools {
    regular: u32,
    premium: u32,
}

impl SeatPools {
    pub fn new(regular: u32, premium: u32) -> Self {
        Self { regular, premium }
    }

    pub fn get(&self, category: SeatCategory) -> u32 {
        match category {
            SeatCategory::Regular => self.regular,
            SeatCategory::Premium => self.premium,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.regular) + u64::from(self.premium)
    }

    /// Remove `seats` from a pool. Leaves the pool untouched and returns
    /// the current count if there are not enough seats.
    pub(crate) fn take(&mut self, category: SeatCategory, seats: SeatCount) -> Result<u32, u32> {
        let slot = self.slot_mut(category);
        match slot.checked_sub(seats.value()) {
            Some(remaining) => {
                *slot = remaining;
                Ok(remaining)
            }
            None => Err(*slot),
        }
    }

    /// Add `seats` back to a pool without exceeding `limit`. Leaves the pool
    /// untouched on failure.
    pub(crate) fn put_back(
        &mut self,
        category: SeatCategory,
        seats: SeatCount,
        limit: u32,
    ) -> Option<u32> {
        let slot = self.slot_mut(category);
        let restored = slot.checked_add(seats.value()).filter(|n| *n <= limit)?;
        *slot = restored;
        Some(restored)
    }

    fn slot_mut(&mut self, category: SeatCategory) -> &mut u32 {
        match category {
            SeatCategory::Regular => &mut self.regular,
            SeatCategory::Premium => &mut self.premium,
        }
    }
}
