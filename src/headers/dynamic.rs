//! Headers whose value is generated for each request.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::headers::header::ApiHeader;
use crate::request::RequestContext;

/// Standard request ID header.
pub const X_REQUEST_ID: &str = "x-request-id";

/// ISO 8601 UTC timestamp, second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Fresh UUID v4 on every request.
#[derive(Debug, Clone)]
pub struct RequestIdHeader {
    name: String,
}

impl RequestIdHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for RequestIdHeader {
    fn default() -> Self {
        Self::new(X_REQUEST_ID)
    }
}

impl ApiHeader for RequestIdHeader {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_value(&self, _request: &RequestContext<'_>) -> Option<String> {
        Some(Uuid::new_v4().to_string())
    }
}

/// Current UTC time, e.g. `2024-05-01T12:30:00Z`.
#[derive(Debug, Clone)]
pub struct TimestampHeader {
    name: String,
}

impl TimestampHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ApiHeader for TimestampHeader {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_value(&self, _request: &RequestContext<'_>) -> Option<String> {
        Some(format_timestamp(Utc::now()))
    }
}

/// Format `time` the way [`TimestampHeader`] sends it.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
