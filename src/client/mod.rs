//! API test client.
//!
//! # Responsibilities
//! - Build requests against a configured base URL
//! - Apply the headers manager to each request right before it is sent
//! - Delegate transport to reqwest
//!
//! # Design Decisions
//! - One client, hence one headers manager, per test
//! - Configured header rules become permanent operations at construction
//! - `execute` is the only dispatch path, so every request gets exactly one
//!   `apply_configuration`

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use reqwest::{Client, Method, Request, Response};
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::headers::{BasicAuthConfiguration, Header, HeadersManager, Operation, Scope};

/// HTTP client for API tests with header management.
#[derive(Debug)]
pub struct ApiTestClient {
    http: Client,
    base_url: Url,
    headers: HeadersManager,
}

impl ApiTestClient {
    /// Create a client from a validated configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.base_url)?;

        let mut headers = HeadersManager::new();
        if let Some(auth) = &config.auth {
            headers.configure_group(
                Operation::Set,
                &BasicAuthConfiguration::new(auth.user.as_str(), auth.password.as_str()),
                Scope::AllRequests,
            )?;
        }
        for rule in &config.headers {
            let header = match &rule.value {
                Some(value) => Header::new(rule.name.as_str(), value.as_str()),
                None => Header::named(rule.name.as_str()),
            };
            headers.configure(rule.operation, header, Scope::AllRequests)?;
        }

        tracing::debug!(
            base_url = %base_url,
            permanent_headers = headers.permanent_operations().len(),
            "API test client created"
        );

        Ok(Self {
            http,
            base_url,
            headers,
        })
    }

    /// Headers manager used for every request of this client.
    pub fn headers(&mut self) -> &mut HeadersManager {
        &mut self.headers
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Build a request without a body.
    pub fn request(&self, method: Method, path: &str) -> Result<Request, ClientError> {
        Ok(Request::new(method, self.url(path)?))
    }

    /// Build a request with a JSON body.
    pub fn json_request<T>(&self, method: Method, path: &str, body: &T) -> Result<Request, ClientError>
    where
        T: Serialize + ?Sized,
    {
        let mut request = self.request(method, path)?;
        let bytes = serde_json::to_vec(body)?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(bytes.into());
        Ok(request)
    }

    /// Apply the configured headers to `request` and send it.
    pub async fn execute(&mut self, mut request: Request) -> Result<Response, ClientError> {
        self.headers.apply_configuration(&mut request)?;

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            headers = request.headers().len(),
            "Dispatching request"
        );

        let response = self.http.execute(request).await?;
        tracing::debug!(status = %response.status(), "Response received");
        Ok(response)
    }

    pub async fn get(&mut self, path: &str) -> Result<Response, ClientError> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    pub async fn delete(&mut self, path: &str) -> Result<Response, ClientError> {
        let request = self.request(Method::DELETE, path)?;
        self.execute(request).await
    }

    pub async fn post_json<T>(&mut self, path: &str, body: &T) -> Result<Response, ClientError>
    where
        T: Serialize + ?Sized,
    {
        let request = self.json_request(Method::POST, path, body)?;
        self.execute(request).await
    }

    pub async fn put_json<T>(&mut self, path: &str, body: &T) -> Result<Response, ClientError>
    where
        T: Serialize + ?Sized,
    {
        let request = self.json_request(Method::PUT, path, body)?;
        self.execute(request).await
    }
}
