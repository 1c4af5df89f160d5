//! Post repository
//!
//! Each operation checks one connection out of the pool for its own duration;
//! the `PoolConnection` guard returns it on every exit path.
//! - create/update: validate first, never touch the store on bad input
//! - update/delete: zero affected rows is `NotFound`

use sqlx::SqlitePool;

use crate::models::{Post, ValidationError};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    fn post_not_found(post_id: i64) -> Self {
        Self::NotFound {
            resource: "post",
            id: post_id.to_string(),
        }
    }
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all posts in id order.
    pub async fn list(&self) -> Result<Vec<Post>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let posts: Vec<Post> = sqlx::query_as(
            r#"
            SELECT post_id, title, content
            FROM posts
            ORDER BY post_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!(count = posts.len(), "listed posts");
        Ok(posts)
    }

    /// Get a single post by id.
    pub async fn get(&self, post_id: i64) -> Result<Post, DbError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as(
            r#"
            SELECT post_id, title, content
            FROM posts
            WHERE post_id = ?
            "#,
        )
        .bind(post_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DbError::post_not_found(post_id))
    }

    /// Validate and insert a post. The incoming `post_id` is ignored; the
    /// returned post carries the id the store assigned.
    pub async fn create(&self, post: &Post) -> Result<Post, DbError> {
        let fields = post.validate()?;
        let mut conn = self.pool.acquire().await?;

        let created: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (title, content)
            VALUES (?, ?)
            RETURNING post_id, title, content
            "#,
        )
        .bind(fields.title.as_str())
        .bind(fields.content.as_str())
        .fetch_one(&mut *conn)
        .await?;

        tracing::info!(post_id = created.post_id, "created post");
        Ok(created)
    }

    /// Replace title and content of an existing post, keeping its id.
    pub async fn update(&self, post: &Post) -> Result<Post, DbError> {
        let fields = post.validate()?;
        let mut conn = self.pool.acquire().await?;

        let updated: Post = sqlx::query_as(
            r#"
            UPDATE posts
            SET title = ?, content = ?
            WHERE post_id = ?
            RETURNING post_id, title, content
            "#,
        )
        .bind(fields.title.as_str())
        .bind(fields.content.as_str())
        .bind(post.post_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DbError::post_not_found(post.post_id))?;

        tracing::info!(post_id = updated.post_id, "updated post");
        Ok(updated)
    }

    /// Delete a post by id.
    pub async fn delete(&self, post_id: i64) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM posts WHERE post_id = ?")
            .bind(post_id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::post_not_found(post_id));
        }

        tracing::info!(post_id, "deleted post");
        Ok(())
    }

    /// Number of stored posts.
    pub async fn count(&self) -> Result<i64, DbError> {
        let mut conn = self.pool.acquire().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}
