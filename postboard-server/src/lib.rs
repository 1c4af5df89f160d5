//! postboard-server: CRUD API for posts
//!
//! A SQLite-backed access layer (`db`) for a single `posts` table and an axum
//! HTTP layer (`http`) exposing it. Validation lives with the models.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, PostRepo};
pub use http::{run_server, ServerConfig};
pub use models::{Post, ValidationError};
