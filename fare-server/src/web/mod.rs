//! Web layer for the fare planner.
//!
//! Provides HTTP endpoints for listing airports and cities and for finding
//! the cheapest route between them.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
