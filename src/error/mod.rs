//! Error types for the data layer.
//!
//! One taxonomy covers the whole stack:
//!
//! - [`ApiError::Network`] - the request never produced a usable response
//! - [`ApiError::Status`] - the server answered with a non-2xx status
//! - [`ApiError::Decode`] - a body could not be encoded or decoded
//! - [`ApiError::InvalidId`] - a string id where the wire needs an integer
//!
//! Services and the client propagate these with `?`; the sync layer is the
//! boundary that logs them and replaces them with display strings.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors surfaced by the API client, the services and the sync layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: timeout, connection refused, IO.
    #[error("Network error: {0}")]
    Network(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Request failed: {status} {status_text}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// A request or response body could not be encoded or decoded.
    #[error("Failed to decode body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A string id that does not parse as the integer the wire requires.
    #[error("Invalid numeric id: {value:?}")]
    InvalidId {
        /// The offending id value
        value: String,
    },
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code, resolving the
    /// canonical reason phrase ("Not Found", "Internal Server Error", ...).
    pub fn from_status(status: u16) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown")
            .to_string();
        ApiError::Status {
            status,
            status_text,
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(err) => err.is_retryable(),
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Decode(_) | ApiError::InvalidId { .. } => false,
        }
    }
}
