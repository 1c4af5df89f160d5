//! Domain models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod post;
pub mod validation;

pub use post::{Post, PostContent, PostFields, PostTitle, MAX_CONTENT_LEN, MAX_TITLE_LEN};
pub use validation::ValidationError;
