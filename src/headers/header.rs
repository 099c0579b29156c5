//! Header definitions.
//!
//! A header pairs a name with a value producer. The value is computed when the
//! header is replayed onto a request, so it may depend on that request (a
//! signature, a timestamp, a fresh request ID).

use std::fmt;
use std::sync::Arc;

use crate::request::RequestContext;

/// A request header whose value is produced at replay time.
pub trait ApiHeader: fmt::Debug + Send + Sync {
    /// Header name. Never empty once accepted by the manager.
    fn name(&self) -> &str;

    /// Computes the value to send with `request`. `None` means "no value",
    /// which only REMOVE operations accept.
    fn compute_value(&self, request: &RequestContext<'_>) -> Option<String>;
}

/// Shared handle to a header, as stored by the manager.
pub type SharedHeader = Arc<dyn ApiHeader>;

/// A header with a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    value: Option<String>,
}

impl Header {
    /// Create a header with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a header without a value, typically used for REMOVE.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// The stored value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ApiHeader for Header {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_value(&self, _request: &RequestContext<'_>) -> Option<String> {
        self.value.clone()
    }
}

type ValueFn = dyn Fn(&RequestContext<'_>) -> Option<String> + Send + Sync;

/// A header whose value comes from a closure over the request.
pub struct ComputedHeader {
    name: String,
    compute: Box<ValueFn>,
}

impl ComputedHeader {
    pub fn new<F>(name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&RequestContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            compute: Box::new(compute),
        }
    }
}

impl fmt::Debug for ComputedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedHeader")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ApiHeader for ComputedHeader {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_value(&self, request: &RequestContext<'_>) -> Option<String> {
        (self.compute)(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Method};

    #[test]
    fn test_fixed_header_value() {
        let method = Method::GET;
        let headers = HeaderMap::new();
        let ctx = RequestContext::new(&method, "http://example.com/".into(), &headers);

        let header = Header::new("X-A", "foo");
        assert_eq!(header.name(), "X-A");
        assert_eq!(header.compute_value(&ctx).as_deref(), Some("foo"));

        let header = Header::named("X-B");
        assert_eq!(header.compute_value(&ctx), None);
    }

    #[test]
    fn test_computed_header_sees_request() {
        let method = Method::DELETE;
        let headers = HeaderMap::new();
        let ctx = RequestContext::new(&method, "http://example.com/users/1".into(), &headers);

        let header = ComputedHeader::new("X-Signature", |req| {
            Some(format!("{} {}", req.method(), req.url()))
        });
        assert_eq!(
            header.compute_value(&ctx).as_deref(),
            Some("DELETE http://example.com/users/1")
        );
    }
}
