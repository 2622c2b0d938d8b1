//! Post store abstraction for the Mapia sitemap service.
//!
//! This crate provides a [`PostStore`] trait for reading the `posts` collection
//! from whatever backend hosts it. This enables:
//!
//! - **Unit testing** without a network dependency
//! - **Backend flexibility** (Supabase/PostgREST, a relational pool, in-memory)
//! - **Clean separation** between sitemap rendering and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Post`] with the two projected fields the sitemap needs
//! - [`PostStore`] trait with a single `fetch_posts()` operation
//! - [`StoreError`] with a semantic [`StoreErrorKind`] and backend tag
//! - [`MockPostStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use mapia_posts::{MockPostStore, PostStore};
//!
//! let store = MockPostStore::new().with_post("42", "2024-03-01T10:00:00.000Z");
//! for post in store.fetch_posts()? {
//!     println!("{} created at {:?}", post.id, post.created_at);
//! }
//! ```

#[cfg(feature = "mock")]
mod mock;
mod store;

#[cfg(feature = "mock")]
pub use mock::MockPostStore;
pub use store::{Post, PostId, PostStore, StoreError, StoreErrorKind};
