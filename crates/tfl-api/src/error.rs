//! Error types for the TfL API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, TflError>;

/// Errors returned by the TfL API client.
///
/// Non-success HTTP statuses map onto the named variants below via
/// [`TflError::from_status`]; transport and decoding failures keep their
/// underlying sources.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TflError {
    /// HTTP 400. The API rejected a path or query parameter.
    #[error("bad request: {message}")]
    BadRequest {
        /// Message from the API error body, or the raw body.
        message: String,
    },

    /// HTTP 401. The request was not authorized.
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Message from the API error body, or the raw body.
        message: String,
    },

    /// HTTP 403. Invalid or revoked `app_key`.
    #[error("forbidden: {message}")]
    Forbidden {
        /// Message from the API error body, or the raw body.
        message: String,
    },

    /// HTTP 404. The entity does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Message from the API error body, or the raw body.
        message: String,
    },

    /// HTTP 429. The API quota was exhausted.
    #[error("too many requests: {message}")]
    TooManyRequests {
        /// Message from the API error body, or the raw body.
        message: String,
    },

    /// HTTP 5xx. The API failed on its side.
    #[error("server error (HTTP {status}): {message}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// Message from the API error body, or the raw body.
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("unexpected response (HTTP {status}): {message}")]
    Unexpected {
        /// The HTTP status code.
        status: u16,
        /// Message from the API error body, or the raw body.
        message: String,
    },

    /// The HTTP request itself failed (connection, TLS, timeout).
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response body could not be decoded as JSON.
    #[error("failed to decode JSON response from {path}: {source}")]
    Decode {
        /// Request path that produced the body.
        path: String,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Client construction or URL assembly failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TflError {
    /// Maps a non-success HTTP status code to an error variant.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest { message },
            StatusCode::UNAUTHORIZED => Self::Unauthorized { message },
            StatusCode::FORBIDDEN => Self::Forbidden { message },
            StatusCode::NOT_FOUND => Self::NotFound { message },
            StatusCode::TOO_MANY_REQUESTS => Self::TooManyRequests { message },
            s if s.is_server_error() => Self::Server {
                status: s.as_u16(),
                message,
            },
            s => Self::Unexpected {
                status: s.as_u16(),
                message,
            },
        }
    }

    /// Returns the HTTP status code for status-keyed variants.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::TooManyRequests { .. } => Some(429),
            Self::Server { status, .. } | Self::Unexpected { status, .. } => Some(*status),
            Self::Http(_) | Self::Decode { .. } | Self::Config(_) => None,
        }
    }
}
