//! Configuration schema definitions.
//!
//! This module defines the configuration of the API test client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::headers::Operation;

/// Root configuration for the API test client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL request paths are joined onto (e.g., "http://localhost:8080/api/").
    pub base_url: String,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,

    /// Optional basic authentication applied to every request.
    pub auth: Option<BasicAuthConfig>,

    /// Header rules applied to every request, in order.
    pub headers: Vec<HeaderRuleConfig>,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 30,
            auth: None,
            headers: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Basic authentication credentials.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicAuthConfig {
    pub user: String,
    pub password: String,
}

/// A header operation recorded for all requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeaderRuleConfig {
    /// Header name.
    pub name: String,

    /// Header value. Required for "add" and "set".
    #[serde(default)]
    pub value: Option<String>,

    /// What to do with the header (default: "set").
    #[serde(default = "default_operation")]
    pub operation: Operation,
}

fn default_operation() -> Operation {
    Operation::Set
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Full,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error or a full EnvFilter
    /// string). RUST_LOG takes precedence.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}
