//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mapia_posts::StoreError;
use mapia_sitemap::SitemapError;
use serde_json::json;

/// Server error type.
///
/// Every variant ends the request with 500 and `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The post list could not be read from the store.
    #[error("Failed to fetch the post list from the database: {0}")]
    PostList(#[from] StoreError),

    /// A post could not be turned into a sitemap entry.
    #[error("Failed to build the sitemap: {0}")]
    Sitemap(#[from] SitemapError),

    /// The blocking fetch task panicked or was cancelled.
    #[error("Post fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "Sitemap request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({ "error": message })),
        )
            .into_response()
    }
}
