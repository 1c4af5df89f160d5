//! Static hosting for the single-page client
//!
//! Mounted as the router fallback, so API routes always win and any other
//! path is looked up in the client directory (`/` serves `index.html`).

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use crate::http::server::AppState;

/// Create router serving files from `dir`.
pub fn router(dir: &Path) -> Router<Arc<AppState>> {
    Router::new().fallback_service(ServeDir::new(dir))
}
