//! HTTP server layer
//!
//! Axum server with:
//! - CORS (origin allow-list)
//! - Request tracing
//! - Graceful shutdown
//! - Bare 400 responses for every failure

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
