//! Post record and field validation
//!
//! `Post` is the wire and row shape. `PostTitle` and `PostContent` are the
//! validated forms the access layer writes to the store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for post titles, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum length for post content, in characters
pub const MAX_CONTENT_LEN: usize = 100_000;

/// A post as stored and as sent over the wire.
///
/// `post_id` is 0 until the store assigns one. Missing JSON fields fall back
/// to their defaults so that an incomplete body fails validation rather than
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub post_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Post {
    /// Build an unsaved post (id 0).
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            post_id: 0,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Validate title and content, title first.
    pub fn validate(&self) -> Result<PostFields, ValidationError> {
        Ok(PostFields {
            title: PostTitle::new(&self.title)?,
            content: PostContent::new(&self.content)?,
        })
    }
}

/// Validated title and content, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: PostTitle,
    pub content: PostContent,
}

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new post title.
    ///
    /// # Rules
    /// - Not empty or whitespace only
    /// - Max 100 characters
    /// - Stored as given (no trimming)
    ///
    /// # Example
    /// ```
    /// use postboard_server::models::PostTitle;
    ///
    /// assert!(PostTitle::new("Post 1 title").is_ok());
    /// assert!(PostTitle::new("").is_err());
    /// assert!(PostTitle::new(&"x".repeat(101)).is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        check_text("title", s, MAX_TITLE_LEN)?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PostTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated post content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Create new post content. Same rules as titles, with a 100 000
    /// character limit.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        check_text("content", s, MAX_CONTENT_LEN)?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PostContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn check_text(field: &'static str, s: &str, max: usize) -> Result<(), ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    // Counted in chars to match SQLite's length() on TEXT.
    let actual = s.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_titles() {
        assert!(PostTitle::new("Post 1 title").is_ok());
        assert!(PostTitle::new("a").is_ok());
        assert!(PostTitle::new(&"a".repeat(MAX_TITLE_LEN)).is_ok());
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(
            PostTitle::new("").unwrap_err(),
            ValidationError::Empty { field: "title" }
        );
        assert_eq!(
            PostContent::new(" \t\n").unwrap_err(),
            ValidationError::Empty { field: "content" }
        );
    }

    #[test]
    fn title_max_length() {
        let err = PostTitle::new(&"a".repeat(101)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooLong {
                max: 100,
                actual: 101,
                ..
            }
        ));
    }

    #[test]
    fn content_max_length() {
        assert!(PostContent::new(&"b".repeat(MAX_CONTENT_LEN)).is_ok());
        let err = PostContent::new(&"b".repeat(MAX_CONTENT_LEN + 1)).unwrap_err();
        assert_eq!(err.field(), "content");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 100 two-byte chars: 200 bytes, still within limit
        let title = "é".repeat(100);
        assert_eq!(title.len(), 200);
        assert!(PostTitle::new(&title).is_ok());
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let title = PostTitle::new("  spaced  ").unwrap();
        assert_eq!(title.as_str(), "  spaced  ");
    }

    #[test]
    fn validate_reports_title_before_content() {
        let post = Post::new("", "");
        assert_eq!(post.validate().unwrap_err().field(), "title");

        let post = Post::new("ok", "");
        assert_eq!(post.validate().unwrap_err().field(), "content");
    }

    #[test]
    fn json_shape_is_camel_case() {
        let post = Post {
            post_id: 7,
            title: "t".into(),
            content: "c".into(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "postId": 7, "title": "t", "content": "c" })
        );
    }

    #[test]
    fn missing_fields_default() {
        let post: Post = serde_json::from_str(r#"{"title":"only title"}"#).unwrap();
        assert_eq!(post.post_id, 0);
        assert_eq!(post.content, "");
        assert!(post.validate().is_err());
    }
}
