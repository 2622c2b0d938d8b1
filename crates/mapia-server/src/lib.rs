//! HTTP server for the Mapia sitemap service.
//!
//! This crate provides an axum server that answers every request with the
//! site's sitemap, built from the posts currently in the store.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use mapia_posts_supabase::{StoreSettings, SupabaseStore};
//! use mapia_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(SupabaseStore::new(StoreSettings::new(
//!         "https://xyz.supabase.co",
//!         "anon-key",
//!     )));
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 3000,
//!         site_url: "https://mapia.vercel.app".to_string(),
//!     };
//!
//!     run_server(config, store).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! CDN ──HTTP──► axum server (mapia-server)
//!                    │
//!                    └─► sitemap handler
//!                            │
//!                            ├─► PostStore::fetch_posts (blocking pool)
//!                            │
//!                            └─► mapia_sitemap::post_sitemap ──► XML
//! ```

mod app;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use axum::Router;
use mapia_posts::PostStore;
use state::AppState;
use tokio::net::TcpListener;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Public site base URL used in sitemap entries.
    pub site_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            site_url: "https://mapia.vercel.app".to_string(),
        }
    }
}

/// Build the sitemap router without binding a socket.
///
/// Useful for embedding the handler in another server or driving it in
/// tests with `tower::ServiceExt::oneshot`.
pub fn sitemap_router(store: Arc<dyn PostStore>, site_url: impl Into<String>) -> Router {
    app::create_router(Arc::new(AppState {
        store,
        site_url: site_url.into(),
    }))
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `store` - Post store queried on every request
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    store: Arc<dyn PostStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = sitemap_router(store, config.site_url.clone());

    let listener = bind(&config.host, config.port).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        site_url = %config.site_url,
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind a listener. `host` may be an IP address or a resolvable hostname.
async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the loaded config.
#[must_use]
pub fn server_config_from_config(config: &mapia_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site_url: config.site.url.clone(),
    }
}
