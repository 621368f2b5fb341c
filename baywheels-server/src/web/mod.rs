//! Web layer: the HTTP surface for the query tools.
//!
//! Exposes the two tool endpoints (plain-text results) and a liveness probe.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
