//! Blocking JSON REST calls against a fixed endpoint URL.
//!
//! # Overview
//! An `Endpoint` binds a URL to an allow-list of verbs. Each call encodes an
//! optional body as JSON, applies a `Header` (fields plus optional Basic
//! credentials), runs the request through a `ureq` agent and wraps the
//! exchange in a fully buffered `Response`.
//!
//! # Design
//! - Calls block the calling thread; there is no retry, caching or
//!   background work. Timeouts, redirects and TLS come from the agent.
//! - Only 200 and 201 count as success. Any other status yields
//!   `RestError::Status`, which still carries the `Response`.
//! - The library never installs a `tracing` subscriber.
//!
//! ```no_run
//! use rest_core::{Endpoint, Header, Method};
//!
//! let endpoint = Endpoint::new("https://example.com/version", [Method::Get]);
//! let mut header = Header::basic();
//! header.add("Accept", "application/json");
//! let response = endpoint.get(&header)?;
//! let version: serde_json::Value = response.unmarshal()?;
//! # Ok::<(), rest_core::RestError>(())
//! ```

pub mod endpoint;
pub mod error;
pub mod header;
pub mod method;
pub mod response;

pub use endpoint::Endpoint;
pub use error::{RestError, Result};
pub use header::Header;
pub use method::Method;
pub use response::Response;
pub use ureq::http;
