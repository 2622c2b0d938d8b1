//! Post store trait and error types.
//!
//! Provides the core [`PostStore`] trait for reading posts, along with
//! [`StoreError`] for unified error handling across backends.

use std::fmt;

use serde::Deserialize;

/// Post identifier as returned by the backend.
///
/// Relational backends usually hand out integer keys, document stores and
/// UUID columns hand out strings. Both render verbatim in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    /// Integer primary key.
    Int(i64),
    /// Textual key (UUID, slug, stringified number).
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for PostId {
    fn from(id: i32) -> Self {
        Self::Int(i64::from(id))
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A post projected to the fields the sitemap needs.
///
/// `created_at` is kept as the raw string the backend returned. Parsing and
/// normalization happen at render time so that a malformed value fails the
/// request that renders it, not the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    /// Post identifier.
    pub id: PostId,
    /// Creation timestamp as stored (`None` if the column was null or absent).
    pub created_at: Option<String>,
}

impl Post {
    /// Create a post with a creation timestamp.
    #[must_use]
    pub fn new(id: impl Into<PostId>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Some(created_at.into()),
        }
    }
}

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Collection does not exist.
    NotFound,
    /// Credentials rejected or missing.
    PermissionDenied,
    /// Backend is unreachable or failing.
    Unavailable,
    /// Too many requests.
    RateLimited,
    /// Operation timed out.
    Timeout,
    /// Backend answered with something that is not a post list.
    InvalidResponse,
    /// Other/unknown error category.
    Other,
}

impl StoreErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::PermissionDenied => "Permission denied",
            Self::Unavailable => "Unavailable",
            Self::RateLimited => "Rate limited",
            Self::Timeout => "Timeout",
            Self::InvalidResponse => "Invalid response",
            Self::Other => "Error",
        }
    }
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Backend identifier (e.g., "Supabase", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            backend: None,
            source: None,
        }
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Attach a plain message as the underlying cause.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with_source(Message(message.into()))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "[Backend] Kind: message"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        f.write_str(self.kind.as_str())?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Free-form cause for errors that have no typed source.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

/// Read access to the `posts` collection.
///
/// Implementations return every post projected to `id` and `created_at`,
/// in the order the backend yields them. No filtering, ordering or
/// pagination is applied on top.
pub trait PostStore: Send + Sync {
    /// Fetch all posts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be reached, rejects the
    /// credentials, or answers with something that is not a post list.
    fn fetch_posts(&self) -> Result<Vec<Post>, StoreError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_post_id_display_int() {
        assert_eq!(PostId::Int(42).to_string(), "42");
    }

    #[test]
    fn test_post_id_display_text() {
        let id = PostId::from("3f2b8c1e-0d7a-4e7b-9a55-1c2d3e4f5a6b");

        assert_eq!(id.to_string(), "3f2b8c1e-0d7a-4e7b-9a55-1c2d3e4f5a6b");
    }

    #[test]
    fn test_post_deserialize_numeric_id() {
        let post: Post =
            serde_json::from_str(r#"{"id": 7, "created_at": "2024-03-01T10:00:00+00:00"}"#)
                .unwrap();

        assert_eq!(post.id, PostId::Int(7));
        assert_eq!(post.created_at.as_deref(), Some("2024-03-01T10:00:00+00:00"));
    }

    #[test]
    fn test_post_deserialize_string_id() {
        let post: Post =
            serde_json::from_str(r#"{"id": "42", "created_at": "2024-03-01"}"#).unwrap();

        assert_eq!(post.id, PostId::Text("42".to_owned()));
    }

    #[test]
    fn test_post_deserialize_null_created_at() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "created_at": null}"#).unwrap();

        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_post_deserialize_missing_created_at() {
        let post: Post = serde_json::from_str(r#"{"id": 1}"#).unwrap();

        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_post_new() {
        let post = Post::new(5, "2024-01-01T00:00:00Z");

        assert_eq!(post.id, PostId::Int(5));
        assert_eq!(post.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_store_error_new() {
        let err = StoreError::new(StoreErrorKind::Unavailable);

        assert_eq!(err.kind, StoreErrorKind::Unavailable);
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_store_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::new(StoreErrorKind::Unavailable).with_source(io_err);

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn test_store_error_display_simple() {
        let err = StoreError::new(StoreErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_store_error_display_full() {
        let err = StoreError::new(StoreErrorKind::PermissionDenied)
            .with_backend("Supabase")
            .with_message("Invalid API key");

        assert_eq!(
            err.to_string(),
            "[Supabase] Permission denied: Invalid API key"
        );
    }

    #[test]
    fn test_store_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
