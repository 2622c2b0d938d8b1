//! Supabase post store for the Mapia sitemap service.
//!
//! This crate provides [`SupabaseStore`], an implementation of the
//! [`PostStore`](mapia_posts::PostStore) trait that reads the posts table
//! through the project's PostgREST endpoint:
//!
//! ```text
//! GET {url}/rest/v1/{table}?select=id,created_at
//! apikey: {key}
//! Authorization: Bearer {key}
//! ```
//!
//! The client is synchronous (`ureq`). Async callers should run
//! [`PostStore::fetch_posts`](mapia_posts::PostStore::fetch_posts) on a
//! blocking thread.
//!
//! # Example
//!
//! ```ignore
//! use mapia_posts::PostStore;
//! use mapia_posts_supabase::{StoreSettings, SupabaseStore};
//!
//! let store = SupabaseStore::new(StoreSettings::new("https://xyz.supabase.co", "anon-key"));
//! let posts = store.fetch_posts()?;
//! ```

mod error;

use std::time::Duration;

use mapia_posts::{Post, PostStore, StoreError};
use ureq::Agent;

pub use error::ApiError;

/// Backend identifier for error messages.
const BACKEND: &str = "Supabase";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Columns projected by the fetch.
const SELECT: &str = "id,created_at";

/// Connection settings for [`SupabaseStore`].
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Project URL (e.g. `https://xyz.supabase.co`).
    pub url: String,
    /// API key sent as both `apikey` and bearer token.
    pub key: String,
    /// Table holding the posts.
    pub table: String,
    /// Global timeout for one fetch.
    pub timeout: Duration,
}

impl StoreSettings {
    /// Settings for the `posts` table with the default timeout.
    #[must_use]
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
            table: "posts".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Post store backed by a Supabase project's REST API.
pub struct SupabaseStore {
    agent: Agent,
    posts_url: String,
    key: String,
    bearer: String,
}

impl SupabaseStore {
    /// Create a store from connection settings.
    #[must_use]
    pub fn new(settings: StoreSettings) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(settings.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        let posts_url = format!(
            "{}/rest/v1/{}?select={SELECT}",
            settings.url.trim_end_matches('/'),
            settings.table
        );

        Self {
            agent,
            posts_url,
            bearer: format!("Bearer {}", settings.key),
            key: settings.key,
        }
    }

    /// Full URL of the posts query.
    #[must_use]
    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }
}

impl std::fmt::Debug for SupabaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStore")
            .field("posts_url", &self.posts_url)
            .finish_non_exhaustive()
    }
}

impl PostStore for SupabaseStore {
    fn fetch_posts(&self) -> Result<Vec<Post>, StoreError> {
        tracing::debug!(url = %self.posts_url, "Fetching posts");

        let response = self
            .agent
            .get(&self.posts_url)
            .header("apikey", &self.key)
            .header("Authorization", &self.bearer)
            .header("Accept", "application/json")
            .call()
            .map_err(error::transport_error)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::from_body(status, &error_body).into());
        }

        let body = body_reader
            .read_to_string()
            .map_err(error::transport_error)?;
        let posts: Vec<Post> = serde_json::from_str(&body).map_err(error::invalid_response)?;

        tracing::info!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }
}
