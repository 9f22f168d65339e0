//! HTTP server layer for the REST API.
//!
//! Exposes the design pipeline over JSON endpoints: intake routes seed
//! projects, per-project routes rerun individual stages. Handlers delegate
//! to the service layer and share state through [`AppState`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
