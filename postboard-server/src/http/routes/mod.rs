//! Route handlers organized by resource

pub mod client;
pub mod health;
pub mod posts;
