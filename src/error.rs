//! Error types shared across fetching, normalization and the relay

use thiserror::Error;

/// Errors produced while fetching, normalizing or relaying content
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure (DNS, connect, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    /// No post matches the requested slug
    #[error("no post found for slug '{0}'")]
    NotFound(String),

    /// Asset record lacks a resolvable path or intrinsic dimensions
    #[error("asset is missing {0}")]
    MissingAsset(String),

    /// Malformed subscription input, rejected before any network call
    #[error("invalid subscription input: {0}")]
    Validation(String),

    /// Subscription forwarding failed; backend detail is logged, not exposed
    #[error("subscription could not be forwarded")]
    Relay,

    /// Raw payload did not match the expected envelope
    #[error("failed to decode backend payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Backend timestamp could not be parsed
    #[error("invalid timestamp {0}")]
    InvalidTimestamp(String),
}

impl Error {
    /// Build a `Backend` error from a reqwest response that already failed
    /// the status check. Consumes the body for the error message.
    pub async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Error::Backend { status, body }
    }
}
