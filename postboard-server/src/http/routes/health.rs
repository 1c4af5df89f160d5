//! Health check endpoint
//!
//! Reports the crate version and whether the posts store answers. A store
//! failure is the one place a 503 is returned instead of 400.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::PostRepo;
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<i64>,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match PostRepo::new(&state.pool).count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                posts: Some(count),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version: env!("CARGO_PKG_VERSION"),
                    posts: None,
                }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};

    #[tokio::test]
    async fn health_reports_post_count() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();

        let (status, Json(body)) = health(State(Arc::new(AppState { pool }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.posts, Some(0));
    }

    #[tokio::test]
    async fn missing_table_is_unavailable() {
        // no migrations: the posts table does not exist
        let pool = create_memory_pool().await.unwrap();

        let (status, Json(body)) = health(State(Arc::new(AppState { pool }))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "unavailable");
        assert!(body.posts.is_none());
    }
}
