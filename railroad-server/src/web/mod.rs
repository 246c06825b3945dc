//! Web layer for the railroad server.
//!
//! Provides HTTP endpoints answering route queries over one network.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
