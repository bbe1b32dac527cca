//! Web layer for the tube journey planner.
//!
//! Serves the single-page form, runs calculations on submit, and
//! renders the itinerary plus map. Every calculation error is shown
//! inline on the page; this layer never turns a failed calculation
//! into an HTTP error response.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
