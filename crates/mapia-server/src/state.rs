//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use mapia_posts::PostStore;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Post store queried on every request.
    pub(crate) store: Arc<dyn PostStore>,
    /// Public base URL the sitemap entries are built from.
    pub(crate) site_url: String,
}
