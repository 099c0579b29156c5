//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    http::{HeaderMap, Method, Uri},
    routing::any,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use api_test_headers::ClientConfig;

/// What the echo backend saw.
#[derive(Debug, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl Echo {
    /// Values received for `name` (lowercase), in order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.headers
            .get(name)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
    let mut seen: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers.iter() {
        seen.entry(name.as_str().to_string())
            .or_default()
            .push(value.to_str().unwrap_or_default().to_string());
    }
    let body: Option<Value> = serde_json::from_str(&body).ok();

    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "headers": seen,
        "body": body,
    }))
}

/// Start a backend on an ephemeral port that answers every request with the
/// method, path, headers and JSON body it received.
pub async fn start_echo_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/", any(echo))
        .route("/{*path}", any(echo));

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Client configuration pointing at `addr`.
pub fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        base_url: format!("http://{}/api/", addr),
        timeout_secs: 5,
        ..ClientConfig::default()
    }
}

pub async fn echo_of(res: reqwest::Response) -> Echo {
    assert!(res.status().is_success(), "echo backend returned {}", res.status());
    res.json().await.unwrap()
}
