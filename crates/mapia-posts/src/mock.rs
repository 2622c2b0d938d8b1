//! Mock post store for testing.
//!
//! Provides [`MockPostStore`] for unit testing without a backend.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::store::{Post, PostId, PostStore, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock post store for testing.
///
/// Holds posts in memory and returns them in insertion order. Use the builder
/// methods to configure the mock with test data, or [`MockPostStore::failing`]
/// to simulate a rejected query.
///
/// # Example
///
/// ```ignore
/// use mapia_posts::{MockPostStore, PostStore};
///
/// let store = MockPostStore::new()
///     .with_post(1, "2024-03-01T10:00:00Z")
///     .with_post(2, "2024-03-02T10:00:00Z");
///
/// assert_eq!(store.fetch_posts().unwrap().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockPostStore {
    posts: RwLock<Vec<Post>>,
    failure: RwLock<Option<(StoreErrorKind, String)>>,
    fetch_count: AtomicUsize,
}

impl MockPostStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store whose every fetch fails with the given kind and message.
    #[must_use]
    pub fn failing(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        let store = Self::default();
        *store.failure.write().unwrap() = Some((kind, message.into()));
        store
    }

    /// Add a post with a creation timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_post(self, id: impl Into<PostId>, created_at: impl Into<String>) -> Self {
        self.posts.write().unwrap().push(Post::new(id, created_at));
        self
    }

    /// Add a post whose `created_at` is null.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_untimed_post(self, id: impl Into<PostId>) -> Self {
        self.posts.write().unwrap().push(Post {
            id: id.into(),
            created_at: None,
        });
        self
    }

    /// Number of times [`PostStore::fetch_posts`] has been called.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl PostStore for MockPostStore {
    fn fetch_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if let Some((kind, message)) = self.failure.read().unwrap().as_ref() {
            return Err(StoreError::new(*kind)
                .with_backend(BACKEND)
                .with_message(message.clone()));
        }

        Ok(self.posts.read().unwrap().clone())
    }
}
