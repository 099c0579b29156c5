//! Request header management subsystem.
//!
//! # Data Flow
//! ```text
//! Test code:
//!     configure(op, header, scope)      (any number of times)
//!     → operation.rs (ADD / SET / REMOVE + scope)
//!     → manager.rs   (prune superseded operations, record)
//!
//! Before each request is dispatched:
//!     manager.apply_configuration(request)
//!     → permanent operations, then next-request operations
//!     → header.rs compute_value(request) for ADD / SET
//!     → request add_header / set_header / remove_header
//!     → next-request operations dropped
//! ```
//!
//! # Design Decisions
//! - Operations stay in insertion-ordered lists; several ADDs for one name coexist
//! - Header values are computed at replay time, not at configuration time
//! - The manager is owned by a single test; no locking

pub mod auth;
pub mod configuration;
pub mod dynamic;
pub mod header;
pub mod manager;
pub mod operation;

pub use auth::{BasicAuthConfiguration, BasicAuthHeader, BearerTokenHeader};
pub use configuration::{HeaderConfiguration, HeaderConfigurator, HeaderGroup};
pub use dynamic::{RequestIdHeader, TimestampHeader, X_REQUEST_ID};
pub use header::{ApiHeader, ComputedHeader, Header, SharedHeader};
pub use manager::HeadersManager;
pub use operation::{HeaderOperation, Operation, Scope};
