//! Request header management for HTTP API tests.
//!
//! Tests declare header modifications for every subsequent request or for the
//! next request only; the [`HeadersManager`] resolves conflicts between them
//! and replays a deterministic header set onto each outgoing request.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod observability;
pub mod request;

pub use client::ApiTestClient;
pub use config::ClientConfig;
pub use error::{ClientError, HeaderError};
pub use headers::{Header, HeadersManager, Operation, Scope};
pub use request::{HeaderTarget, RecordingRequest};
