//! `Authorization` headers.

use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::headers::configuration::HeaderConfiguration;
use crate::headers::header::{ApiHeader, Header, SharedHeader};
use crate::request::RequestContext;

/// `Authorization: Basic <base64(user:password)>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuthHeader {
    inner: Header,
}

impl BasicAuthHeader {
    pub fn new(user: &str, password: &str) -> Self {
        let credentials = STANDARD.encode(format!("{}:{}", user, password));
        Self {
            inner: Header::new(AUTHORIZATION.as_str(), format!("Basic {}", credentials)),
        }
    }
}

impl ApiHeader for BasicAuthHeader {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn compute_value(&self, request: &RequestContext<'_>) -> Option<String> {
        self.inner.compute_value(request)
    }
}

/// `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerTokenHeader {
    inner: Header,
}

impl BearerTokenHeader {
    pub fn new(token: &str) -> Self {
        Self {
            inner: Header::new(AUTHORIZATION.as_str(), format!("Bearer {}", token)),
        }
    }
}

impl ApiHeader for BearerTokenHeader {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn compute_value(&self, request: &RequestContext<'_>) -> Option<String> {
        self.inner.compute_value(request)
    }
}

/// Header group holding a single [`BasicAuthHeader`].
#[derive(Debug, Clone)]
pub struct BasicAuthConfiguration {
    user: String,
    password: String,
}

impl BasicAuthConfiguration {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl HeaderConfiguration for BasicAuthConfiguration {
    fn headers(&self) -> Vec<SharedHeader> {
        let header: SharedHeader = Arc::new(BasicAuthHeader::new(&self.user, &self.password));
        vec![header]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Method};

    fn value_of(header: &dyn ApiHeader) -> Option<String> {
        let method = Method::GET;
        let headers = HeaderMap::new();
        header.compute_value(&RequestContext::new(&method, "http://localhost/".into(), &headers))
    }

    #[test]
    fn test_basic_auth_header() {
        let header = BasicAuthHeader::new("Aladdin", "open sesame");
        assert_eq!(header.name(), "authorization");
        assert_eq!(
            value_of(&header).as_deref(),
            Some("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==")
        );
    }

    #[test]
    fn test_bearer_header() {
        let header = BearerTokenHeader::new("abc123");
        assert_eq!(value_of(&header).as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn test_basic_auth_configuration() {
        let headers = BasicAuthConfiguration::new("alice", "secret").headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(value_of(headers[0].as_ref()).as_deref(), Some("Basic YWxpY2U6c2VjcmV0"));
    }
}
