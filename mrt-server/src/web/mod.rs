//! Web layer for the MRT schedule proxy.
//!
//! Provides HTTP endpoints for listing stations and checking upcoming
//! departures, wrapped in a common JSON envelope.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
