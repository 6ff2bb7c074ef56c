//! Web layer for the arrivals server.
//!
//! Provides HTTP endpoints for upcoming arrivals and the designated stop.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
