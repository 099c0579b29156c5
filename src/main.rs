//! `api-call`: send one API request with managed headers.
//!
//! Loads an optional client config (base URL, timeout, permanent header
//! rules), adds the headers given on the command line for this request only,
//! sends the request and prints the response.

use std::path::PathBuf;

use clap::Parser;
use reqwest::Method;
use serde_json::Value;

use api_test_headers::config::{load_config, ClientConfig};
use api_test_headers::headers::{Header, Operation, RequestIdHeader, Scope};
use api_test_headers::observability::init_logging;
use api_test_headers::ApiTestClient;

#[derive(Parser)]
#[command(name = "api-call")]
#[command(about = "Send an API request with managed headers", long_about = None)]
struct Cli {
    /// TOML client configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL, overrides the configuration.
    #[arg(short, long)]
    url: Option<String>,

    /// HTTP method.
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Remove a header (repeatable).
    #[arg(long, value_name = "NAME")]
    remove: Vec<String>,

    /// Set a header, replacing existing values (repeatable).
    #[arg(long, value_name = "NAME:VALUE")]
    set: Vec<String>,

    /// Append a header (repeatable).
    #[arg(long, value_name = "NAME:VALUE")]
    add: Vec<String>,

    /// Send a fresh x-request-id.
    #[arg(long)]
    request_id: bool,

    /// JSON request body.
    #[arg(short, long)]
    data: Option<String>,

    /// Request path, relative to the base URL.
    path: String,
}

fn parse_header(arg: &str) -> Result<Header, String> {
    match arg.split_once(':') {
        Some((name, value)) => Ok(Header::new(name.trim(), value.trim())),
        None => Err(format!("expected NAME:VALUE, got {:?}", arg)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = cli.url {
        config.base_url = url;
    }
    init_logging(&config.logging);

    let method = Method::from_bytes(cli.method.to_uppercase().as_bytes())?;
    let mut client = ApiTestClient::new(&config)?;

    // Command-line headers only concern this request.
    let headers = client.headers();
    for name in &cli.remove {
        headers.configure(Operation::Remove, Header::named(name.as_str()), Scope::NextRequest)?;
    }
    for arg in &cli.set {
        headers.configure(Operation::Set, parse_header(arg)?, Scope::NextRequest)?;
    }
    for arg in &cli.add {
        headers.configure(Operation::Add, parse_header(arg)?, Scope::NextRequest)?;
    }
    if cli.request_id {
        headers.configure(Operation::Set, RequestIdHeader::default(), Scope::NextRequest)?;
    }

    let request = match &cli.data {
        Some(data) => {
            let body: Value = serde_json::from_str(data)?;
            client.json_request(method, &cli.path, &body)?
        }
        None => client.request(method, &cli.path)?,
    };

    let res = client.execute(request).await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    println!("{:?} {}", res.version(), res.status());
    for (name, value) in res.headers() {
        println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    println!();

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
