//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool, one checked-out connection per repository call
//! - Validate before writing; the schema enforces the same limits
//! - Single statement per operation, no cross-call transactions

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use seed::seed_sample_posts;
