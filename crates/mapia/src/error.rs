//! CLI error types.

use mapia_config::ConfigError;
use mapia_posts::StoreError;
use mapia_sitemap::SitemapError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch the post list from the database: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Sitemap(#[from] SitemapError),

    #[error("{0}")]
    Server(String),
}
