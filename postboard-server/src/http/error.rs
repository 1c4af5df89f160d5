//! API error type with IntoResponse
//!
//! Every failure becomes a bare 400 with no body. The cause is logged here
//! and never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Post fields failed validation
    Validation(ValidationError),

    /// No row with the requested id
    NotFound { resource: &'static str, id: String },

    /// Store rejected or failed the operation (logged at error level)
    Database(DbError),

    /// Request could not be parsed (bad JSON, non-integer path id)
    BadRequest { reason: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => {
                tracing::debug!(field = e.field(), "Validation failed: {}", e);
            }
            Self::NotFound { resource, id } => {
                tracing::debug!("{} '{}' not found", resource, id);
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
            }
            Self::BadRequest { reason } => {
                tracing::debug!("Malformed request: {}", reason);
            }
        }

        self.status().into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Validation(v) => Self::Validation(v),
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn assert_bare_400(err: ApiError) {
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        assert_bare_400(ApiError::Validation(ValidationError::Empty { field: "title" })).await;
    }

    #[tokio::test]
    async fn not_found_is_400() {
        assert_bare_400(ApiError::NotFound {
            resource: "post",
            id: "1".into(),
        })
        .await;
    }

    #[tokio::test]
    async fn database_error_is_400_without_detail() {
        assert_bare_400(ApiError::Database(DbError::Sqlx(sqlx::Error::RowNotFound))).await;
    }

    #[test]
    fn db_error_kinds_map_through() {
        let err = ApiError::from(DbError::NotFound {
            resource: "post",
            id: "3".into(),
        });
        assert!(matches!(err, ApiError::NotFound { id, .. } if id == "3"));

        let err = ApiError::from(DbError::Validation(ValidationError::Empty {
            field: "content",
        }));
        assert!(matches!(err, ApiError::Validation(_)));

        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, ApiError::Database(_)));
    }
}
