//! Command Handlers module
//!
//! Handlers turn raw commands into validated ledger calls and log the
//! outcome against the request's correlation id.

mod book_handler;
mod cancel_handler;
mod commands;


pub use book_handler::BookSeatsHandler;
pub use cancel_handler::CancelBookingHandler;
pub use commands::*;
