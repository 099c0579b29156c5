//! Error definitions shared by the header manager, the request adapters and
//! the test client.

use thiserror::Error;

/// Errors raised while recording or applying header operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// A required argument was missing or empty (a bug in the calling test).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The header name is not a valid HTTP token.
    #[error("Invalid header name: {0:?}")]
    InvalidName(String),

    /// The computed value cannot be carried in an HTTP header.
    #[error("Invalid value for header {name}")]
    InvalidValue { name: String },

    /// ADD or SET was replayed with a header whose value computed to nothing.
    #[error("Header {0} has no value")]
    MissingValue(String),
}

/// Result type for header operations.
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Errors returned by [`ApiTestClient`](crate::client::ApiTestClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Building or sending the request failed in the HTTP stack.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request path could not be joined onto the base URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A configured header could not be applied to the request.
    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    /// The request body could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
