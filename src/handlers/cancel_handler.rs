//! Cancel Booking Handler

use crate::domain::{BookingId, OperationContext};
use crate::error::AppError;
use crate::ledger::SharedLedger;

use super::{CancelBookingCommand, CancelBookingResult};

/// Handler for booking cancellation
#[derive(Debug, Clone)]
pub struct CancelBookingHandler {
    ledger: SharedLedger,
}

impl CancelBookingHandler {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Cancel the booking and hand its seats back to the show
    pub fn execute(
        &self,
        command: CancelBookingCommand,
        context: &OperationContext,
    ) -> Result<CancelBookingResult, AppError> {
        let booking_id = BookingId::new(command.booking_id);

        let show = self.ledger.cancel(booking_id).map_err(|e| {
            tracing::info!(
                correlation_id = %context.correlation_id,
                client_ip = ?context.client_ip,
                booking_id = %booking_id,
                error = %e,
                "Cancellation rejected"
            );
            AppError::from(e)
        })?;

        tracing::info!(
            correlation_id = %context.correlation_id,
            client_ip = ?context.client_ip,
            booking_id = %booking_id,
            show_id = %show.id(),
            "Booking canceled"
        );

        Ok(CancelBookingResult {
            booking_id,
            show,
            message: format!("Canceled booking ID: {}.", booking_id),
        })
    }
}
