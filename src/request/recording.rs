//! A request that records header calls instead of performing them.

use std::borrow::Cow;
use std::convert::Infallible;

use axum::http::{HeaderMap, Method};

use crate::request::{HeaderTarget, RequestContext};

/// One primitive call made on a [`RecordingRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderCall {
    Add { name: String, value: Option<String> },
    Set { name: String, value: Option<String> },
    Remove { name: String },
}

impl HeaderCall {
    pub fn add(name: &str, value: &str) -> Self {
        HeaderCall::Add {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn set(name: &str, value: &str) -> Self {
        HeaderCall::Set {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn remove(name: &str) -> Self {
        HeaderCall::Remove {
            name: name.to_string(),
        }
    }
}

/// Records every mutation in call order. Useful to assert exactly what the
/// headers manager did.
#[derive(Debug, Clone)]
pub struct RecordingRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    calls: Vec<HeaderCall>,
}

impl RecordingRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[HeaderCall] {
        &self.calls
    }

    /// Return the recorded calls and start a fresh record.
    pub fn take_calls(&mut self) -> Vec<HeaderCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Default for RecordingRequest {
    fn default() -> Self {
        Self::new(Method::GET, "http://localhost/")
    }
}

impl HeaderTarget for RecordingRequest {
    type Error = Infallible;

    fn context(&self) -> RequestContext<'_> {
        RequestContext::new(&self.method, Cow::Borrowed(self.url.as_str()), &self.headers)
    }

    fn add_header(&mut self, name: &str, value: Option<String>) -> Result<(), Infallible> {
        self.calls.push(HeaderCall::Add {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn set_header(&mut self, name: &str, value: Option<String>) -> Result<(), Infallible> {
        self.calls.push(HeaderCall::Set {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn remove_header(&mut self, name: &str) -> Result<(), Infallible> {
        self.calls.push(HeaderCall::Remove {
            name: name.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::{ComputedHeader, HeadersManager, Operation, Scope};

    #[test]
    fn test_computed_value_uses_request() {
        let mut manager = HeadersManager::new();
        manager
            .configure(
                Operation::Set,
                ComputedHeader::new("X-Target", |req| Some(format!("{} {}", req.method(), req.url()))),
                Scope::AllRequests,
            )
            .unwrap();

        let mut request = RecordingRequest::new(Method::POST, "http://api.test/orders");
        manager.apply_configuration(&mut request).unwrap();

        assert_eq!(
            request.take_calls(),
            vec![HeaderCall::set("X-Target", "POST http://api.test/orders")]
        );
        assert!(request.calls().is_empty());
    }

    #[test]
    fn test_missing_value_is_recorded() {
        let mut request = RecordingRequest::default();
        request.set_header("X-Empty", None).unwrap();
        assert_eq!(
            request.calls(),
            &[HeaderCall::Set {
                name: "X-Empty".into(),
                value: None
            }]
        );
    }
}
