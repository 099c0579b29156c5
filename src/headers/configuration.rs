//! Header groups and their producers.

use std::sync::Arc;

use crate::headers::header::{ApiHeader, SharedHeader};

/// A group of headers configured together with one operation.
pub trait HeaderConfiguration: Send + Sync {
    /// Headers of the group, in configuration order.
    fn headers(&self) -> Vec<SharedHeader>;
}

/// Produces the header groups a test should start with.
pub trait HeaderConfigurator: Send + Sync {
    fn header_configurations(&self) -> Vec<Box<dyn HeaderConfiguration>>;
}

/// Ordered list of headers.
#[derive(Debug, Clone, Default)]
pub struct HeaderGroup {
    headers: Vec<SharedHeader>,
}

impl HeaderGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header to the group.
    pub fn with<H: ApiHeader + 'static>(mut self, header: H) -> Self {
        self.headers.push(Arc::new(header));
        self
    }

    pub fn push(&mut self, header: SharedHeader) {
        self.headers.push(header);
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl HeaderConfiguration for HeaderGroup {
    fn headers(&self) -> Vec<SharedHeader> {
        self.headers.clone()
    }
}

impl HeaderConfiguration for Vec<SharedHeader> {
    fn headers(&self) -> Vec<SharedHeader> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::auth::BasicAuthConfiguration;
    use crate::headers::header::Header;
    use crate::headers::manager::HeadersManager;
    use crate::request::{HeaderCall, RecordingRequest};

    struct ApiClientConfigurator;

    impl HeaderConfigurator for ApiClientConfigurator {
        fn header_configurations(&self) -> Vec<Box<dyn HeaderConfiguration>> {
            vec![
                Box::new(BasicAuthConfiguration::new("alice", "secret")),
                Box::new(
                    HeaderGroup::new()
                        .with(Header::new("Accept", "application/json"))
                        .with(Header::new("X-Client", "tests")),
                ),
            ]
        }
    }

    #[test]
    fn test_configurators_set_for_all_requests() {
        let mut manager = HeadersManager::new();
        manager.apply_configurators(&[&ApiClientConfigurator]).unwrap();

        for _ in 0..2 {
            let mut request = RecordingRequest::default();
            manager.apply_configuration(&mut request).unwrap();
            assert_eq!(
                request.calls(),
                &[
                    HeaderCall::set("authorization", "Basic YWxpY2U6c2VjcmV0"),
                    HeaderCall::set("Accept", "application/json"),
                    HeaderCall::set("X-Client", "tests"),
                ]
            );
        }
    }

    #[test]
    fn test_vec_group() {
        let group: Vec<SharedHeader> = vec![Arc::new(Header::new("X-A", "1"))];
        assert_eq!(group.headers().len(), 1);
        assert_eq!(group.headers()[0].name(), "X-A");

        let mut built = HeaderGroup::new();
        assert!(built.is_empty());
        built.push(Arc::new(Header::named("X-B")));
        assert_eq!(built.len(), 1);
    }
}
