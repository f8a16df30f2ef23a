//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingId, OperationContext, SeatPools, Show, ShowId};
use crate::error::AppError;
use crate::handlers::{
    BookSeatsCommand, BookSeatsHandler, CancelBookingCommand, CancelBookingHandler,
};
use crate::ledger::SharedLedger;
use crate::projection::{BookingHistoryEntry, ProjectionService, ShowAvailability};

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct BookSeatsRequest {
    pub show_id: String,
    pub category: String,
    pub seats: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookSeatsResponse {
    pub booking: Booking,
    pub available_seats: SeatPools,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    pub booking_id: BookingId,
    pub show: Show,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BookingHistoryResponse {
    pub entries: Vec<BookingHistoryEntry>,
    pub total_price: Decimal,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<SharedLedger> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/availability", get(show_availability))
        .route("/shows/:show_id", get(get_show))
        .route("/bookings", get(list_bookings).post(book_seats))
        .route("/bookings/history", get(booking_history))
        .route("/bookings/:booking_id", delete(cancel_booking))
}

// =========================================================================
// Shows
// =========================================================================

/// All shows in creation order
async fn list_shows(State(ledger): State<SharedLedger>) -> Json<Vec<Show>> {
    Json(ledger.list_shows())
}

async fn get_show(
    State(ledger): State<SharedLedger>,
    Path(show_id): Path<String>,
) -> Result<Json<Show>, AppError> {
    let show = ledger.get_show(&ShowId::new(show_id))?;
    Ok(Json(show))
}

async fn show_availability(State(ledger): State<SharedLedger>) -> Json<Vec<ShowAvailability>> {
    Json(ProjectionService::new(ledger).availability())
}

// =========================================================================
// Bookings
// =========================================================================

/// Active bookings in insertion order
async fn list_bookings(State(ledger): State<SharedLedger>) -> Json<Vec<Booking>> {
    Json(ledger.list_bookings())
}

async fn book_seats(
    State(ledger): State<SharedLedger>,
    Extension(context): Extension<OperationContext>,
    Json(request): Json<BookSeatsRequest>,
) -> Result<(StatusCode, Json<BookSeatsResponse>), AppError> {
    let handler = BookSeatsHandler::new(ledger);
    let command = BookSeatsCommand::new(request.show_id, request.category, request.seats);

    let result = handler.execute(command, &context)?;

    Ok((
        StatusCode::CREATED,
        Json(BookSeatsResponse {
            booking: result.booking,
            available_seats: *result.show.available_seats(),
            message: result.message,
        }),
    ))
}

async fn cancel_booking(
    State(ledger): State<SharedLedger>,
    Extension(context): Extension<OperationContext>,
    Path(booking_id): Path<u64>,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let handler = CancelBookingHandler::new(ledger);

    let result = handler.execute(CancelBookingCommand::new(booking_id), &context)?;

    Ok(Json(CancelBookingResponse {
        booking_id: result.booking_id,
        show: result.show,
        message: result.message,
    }))
}

/// Priced booking history for display
async fn booking_history(State(ledger): State<SharedLedger>) -> Json<BookingHistoryResponse> {
    let entries = ProjectionService::new(ledger).booking_history();
    let total_price = ProjectionService::total_price(&entries);
    Json(BookingHistoryResponse {
        entries,
        total_price,
    })
}
