//! Book Seats Handler
//!
//! Validates booking input and reserves seats through the shared ledger.

use crate::domain::{DomainError, OperationContext, SeatCategory, SeatCount, ShowId};
use crate::error::AppError;
use crate::ledger::SharedLedger;

use super::{BookSeatsCommand, BookSeatsResult};

/// Handler for seat bookings
#[derive(Debug, Clone)]
pub struct BookSeatsHandler {
    ledger: SharedLedger,
}

impl BookSeatsHandler {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Execute the booking command
    pub fn execute(
        &self,
        command: BookSeatsCommand,
        context: &OperationContext,
    ) -> Result<BookSeatsResult, AppError> {
        let show_id = command.show_id.trim();
        if show_id.is_empty() {
            return Err(AppError::InvalidRequest("show_id must not be empty".to_string()));
        }
        let show_id = ShowId::new(show_id);
        let category: SeatCategory = command.category.parse()?;
        let seats = SeatCount::new(command.seats)?;

        // Booking and the post-booking read happen under one write lock
        let outcome = self.ledger.write(|ledger| {
            let booking = ledger.book(&show_id, category, seats)?;
            let show = ledger.get_show(&show_id)?;
            Ok::<_, DomainError>((booking, show))
        });

        let (booking, show) = match outcome {
            Ok(pair) => pair,
            Err(e) => {
                tracing::info!(
                    correlation_id = %context.correlation_id,
                    client_ip = ?context.client_ip,
                    show_id = %show_id,
                    category = %category,
                    seats = seats.value(),
                    error = %e,
                    "Booking rejected"
                );
                return Err(e.into());
            }
        };

        tracing::info!(
            correlation_id = %context.correlation_id,
            client_ip = ?context.client_ip,
            booking_id = %booking.id(),
            show_id = %show_id,
            category = %category,
            seats = seats.value(),
            available = show.available(category),
            "Booking created"
        );

        let message = format!(
            "Booked {} {} ticket(s) for {}.",
            seats,
            category,
            show.title()
        );

        Ok(BookSeatsResult {
            booking,
            show,
            message,
        })
    }
}
