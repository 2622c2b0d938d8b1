//! Sitemap endpoint.
//!
//! Fetches every post from the store and renders the sitemap document.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use mapia_sitemap::post_sitemap;

use crate::error::ServerError;
use crate::state::AppState;

/// Content type of the sitemap document.
pub(crate) const CONTENT_TYPE: &str = "application/xml";

/// Let the CDN keep the document for 24 hours and serve it stale while refreshing.
pub(crate) const CACHE_CONTROL: &str = "s-maxage=86400, stale-while-revalidate";

/// Handle any request: respond with the sitemap.
///
/// The store query runs on the blocking pool and is awaited before anything
/// is rendered. Failures become a 500 through [`ServerError`].
pub(crate) async fn get_sitemap(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let store = Arc::clone(&state.store);
    let posts = tokio::task::spawn_blocking(move || store.fetch_posts()).await??;

    let xml = post_sitemap(&state.site_url, &posts)?.to_xml();

    Ok((
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        xml,
    ))
}
