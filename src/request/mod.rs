//! Request mutation capability.
//!
//! # Responsibilities
//! - Expose add / set / remove header primitives to the headers manager
//! - Give computed headers a read-only view of the request
//!
//! # Implementations
//! - `reqwest::Request` and `http::Request<B>` (adapters.rs)
//! - `RecordingRequest`, which only records calls (recording.rs)

use std::borrow::Cow;

use axum::http::{HeaderMap, Method};

mod adapters;
mod recording;

pub use recording::{HeaderCall, RecordingRequest};

/// Something the headers manager can mutate.
pub trait HeaderTarget {
    /// Error raised by the mutation primitives, returned unchanged by the manager.
    type Error;

    /// Read-only view of the request, handed to computed headers.
    fn context(&self) -> RequestContext<'_>;

    /// Append a header; existing headers with the same name are kept.
    fn add_header(&mut self, name: &str, value: Option<String>) -> Result<(), Self::Error>;

    /// Replace every header with the same name.
    fn set_header(&mut self, name: &str, value: Option<String>) -> Result<(), Self::Error>;

    /// Remove every header with the same name.
    fn remove_header(&mut self, name: &str) -> Result<(), Self::Error>;
}

/// Borrowed request metadata for header value computation.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    method: &'a Method,
    url: Cow<'a, str>,
    headers: &'a HeaderMap,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a Method, url: Cow<'a, str>, headers: &'a HeaderMap) -> Self {
        Self {
            method,
            url,
            headers,
        }
    }

    pub fn method(&self) -> &Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers currently on the request, before this operation is applied.
    pub fn headers(&self) -> &HeaderMap {
        self.headers
    }
}
