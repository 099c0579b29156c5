//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! headers manager, client, config loader:
//!     → tracing events (debug: configure/dispatch, trace: each replayed operation)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout, or the test writer under `cargo test`
//! ```
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - RUST_LOG overrides the configured level
//! - Initialization is idempotent so every test may call it

pub mod logging;

pub use logging::{init_logging, init_test_logging};
