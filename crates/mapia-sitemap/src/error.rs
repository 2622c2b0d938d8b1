//! Sitemap error types.

/// Error while turning posts into sitemap entries.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// The post has no `created_at` value.
    #[error("post {post_id} has no created_at timestamp")]
    MissingTimestamp {
        /// Offending post id.
        post_id: String,
    },

    /// The post's `created_at` value is not a recognizable timestamp.
    #[error("post {post_id} has an invalid created_at timestamp: {value:?}")]
    InvalidTimestamp {
        /// Offending post id.
        post_id: String,
        /// Raw value as returned by the store.
        value: String,
    },
}
