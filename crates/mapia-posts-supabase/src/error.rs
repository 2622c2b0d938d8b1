//! Mapping of PostgREST failures onto [`StoreError`].

use mapia_posts::{StoreError, StoreErrorKind};
use serde::Deserialize;

use crate::BACKEND;

/// Error response from the REST API.
#[derive(Debug, thiserror::Error)]
#[error("HTTP {status}: {message}")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// `message` field of the error body, or the raw body.
    pub message: String,
}

/// Error body shape shared by PostgREST and the Supabase gateway.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Build from a status and the raw response body.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "(empty response body)".to_owned()
                } else {
                    trimmed.to_owned()
                }
            });
        Self { status, message }
    }
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        let kind = match err.status {
            401 | 403 => StoreErrorKind::PermissionDenied,
            404 => StoreErrorKind::NotFound,
            408 => StoreErrorKind::Timeout,
            429 => StoreErrorKind::RateLimited,
            500..=599 => StoreErrorKind::Unavailable,
            _ => StoreErrorKind::Other,
        };
        StoreError::new(kind)
            .with_backend(BACKEND)
            .with_source(err)
    }
}

/// Map a transport-level failure (no HTTP response) to a store error.
pub(crate) fn transport_error(err: ureq::Error) -> StoreError {
    let timed_out = match &err {
        ureq::Error::Timeout(_) => true,
        ureq::Error::Io(io) => io.kind() == std::io::ErrorKind::TimedOut,
        _ => false,
    };
    let kind = if timed_out {
        StoreErrorKind::Timeout
    } else {
        StoreErrorKind::Unavailable
    };
    StoreError::new(kind)
        .with_backend(BACKEND)
        .with_source(err)
}

/// Map an undecodable success body to a store error.
pub(crate) fn invalid_response(err: serde_json::Error) -> StoreError {
    StoreError::new(StoreErrorKind::InvalidResponse)
        .with_backend(BACKEND)
        .with_source(err)
}
