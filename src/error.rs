//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::{DomainError, SeatInputError};

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    InvalidInput(#[from] SeatInputError),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// HTTP status and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::InvalidInput(SeatInputError::UnknownCategory(_)) => {
                (StatusCode::BAD_REQUEST, "unknown_category")
            }
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_seat_count"),
            AppError::Domain(domain_err) => match domain_err {
                DomainError::InsufficientSeats { .. } => (StatusCode::CONFLICT, "insufficient_seats"),
                DomainError::ShowNotFound(_) => (StatusCode::NOT_FOUND, "show_not_found"),
                DomainError::BookingNotFound(_) => (StatusCode::NOT_FOUND, "booking_not_found"),
                DomainError::CapacityExceeded { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "seat_accounting_error")
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let details = match &self {
            AppError::InvalidRequest(msg) => Some(msg.clone()),
            AppError::InvalidInput(e) => Some(e.to_string()),
            AppError::Domain(DomainError::InsufficientSeats { category, .. }) => {
                Some(format!("Not enough {} seats available.", category))
            }
            AppError::Domain(DomainError::ShowNotFound(id)) => Some(id.to_string()),
            AppError::Domain(DomainError::BookingNotFound(id)) => Some(id.to_string()),
            AppError::Domain(e @ DomainError::CapacityExceeded { .. }) => {
                tracing::error!("Seat accounting error: {}", e);
                None
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
