//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Base URL parses and uses http or https
//! - Timeout is non-zero
//! - Header rules are complete (name always, value for add/set)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;
use crate::headers::Operation;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("base_url {url:?} is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("base_url scheme must be http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("headers[{0}] has an empty name")]
    EmptyHeaderName(usize),

    #[error("headers[{index}] ({name}) needs a value for {operation}")]
    MissingHeaderValue {
        index: usize,
        name: String,
        operation: Operation,
    },
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (index, rule) in config.headers.iter().enumerate() {
        if rule.name.trim().is_empty() {
            errors.push(ValidationError::EmptyHeaderName(index));
            continue;
        }
        if rule.operation != Operation::Remove && rule.value.is_none() {
            errors.push(ValidationError::MissingHeaderValue {
                index,
                name: rule.name.clone(),
                operation: rule.operation,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
