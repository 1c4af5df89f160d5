//! Post endpoints
//!
//! One access layer call per route. Success is 200 with the post(s) or a
//! short JSON string message; every failure is a bare 400 (see `ApiError`).

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::db::repos::PostRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{PostId, PostJson};
use crate::http::server::AppState;
use crate::models::Post;

/// GET /get-all-posts
async fn get_all_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = PostRepo::new(&state.pool).list().await?;
    Ok(Json(posts))
}

/// GET /get-post-by-id/{post_id}
async fn get_post_by_id(
    State(state): State<Arc<AppState>>,
    PostId(post_id): PostId,
) -> Result<Json<Post>, ApiError> {
    let post = PostRepo::new(&state.pool).get(post_id).await?;
    Ok(Json(post))
}

/// POST /create-post - `postId` in the body is ignored
async fn create_post(
    State(state): State<Arc<AppState>>,
    PostJson(post): PostJson,
) -> Result<Json<&'static str>, ApiError> {
    PostRepo::new(&state.pool).create(&post).await?;
    Ok(Json("Create successful"))
}

/// PUT /update-post
async fn update_post(
    State(state): State<Arc<AppState>>,
    PostJson(post): PostJson,
) -> Result<Json<&'static str>, ApiError> {
    PostRepo::new(&state.pool).update(&post).await?;
    Ok(Json("Update successful"))
}

/// DELETE /delete-post-by-id/{post_id}
async fn delete_post_by_id(
    State(state): State<Arc<AppState>>,
    PostId(post_id): PostId,
) -> Result<Json<&'static str>, ApiError> {
    PostRepo::new(&state.pool).delete(post_id).await?;
    Ok(Json("Delete successful"))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get-all-posts", get(get_all_posts))
        .route("/get-post-by-id/{post_id}", get(get_post_by_id))
        .route("/create-post", post(create_post))
        .route("/update-post", put(update_post))
        .route("/delete-post-by-id/{post_id}", delete(delete_post_by_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::{create_memory_pool, migrations};

    async fn app() -> (Router, sqlx::SqlitePool) {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        let app = router().with_state(Arc::new(AppState { pool: pool.clone() }));
        (app, pool)
    }

    #[tokio::test]
    async fn create_reports_message() {
        let (app, pool) = app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/create-post")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"postId":0,"title":"Post 1 title","content":"Post 1 content"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#""Create successful""#);
        assert_eq!(PostRepo::new(&pool).count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn non_integer_id_is_400() {
        let (app, _pool) = app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/get-post-by-id/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_400() {
        let (app, _pool) = app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/create-post")
                    .body(Body::from(r#"{"title":"t","content":"c"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
