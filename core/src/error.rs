//! Error types for endpoint calls.
//!
//! # Design
//! Every failure stage of a call gets its own variant so callers can tell a
//! local rejection (allow-list, serialization, malformed URL) from a network
//! failure or an unsuccessful status. `Status` carries the fully buffered
//! `Response`, so an error body stays inspectable after the call fails;
//! `BodyRead` does the same for a success whose body was cut short.

use std::io;

use thiserror::Error;

use crate::method::Method;
use crate::response::Response;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RestError>;

/// Errors returned by `Endpoint` calls and `Response` accessors.
#[derive(Debug, Error)]
pub enum RestError {
    /// The verb is not in the endpoint's allow-list. Raised before any I/O.
    // Spelling matches the message existing callers match on.
    #[error("Unsuported method '{method}' on {url}")]
    UnsupportedMethod { method: Method, url: String },

    /// A string did not name one of the supported verbs.
    #[error("unknown HTTP method '{0}'")]
    UnknownMethod(String),

    /// The request body could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The URL, verb or a header field could not form a valid request.
    #[error("invalid request: {0}")]
    RequestConstruction(#[from] ureq::http::Error),

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// A successful response whose body could not be fully drained. The
    /// response keeps the status, headers and whatever bytes arrived.
    #[error("failed to read response body: {source}")]
    BodyRead {
        #[source]
        source: io::Error,
        response: Box<Response>,
    },

    /// The exchange completed with a status other than 200 or 201.
    #[error("Got status code: {status}")]
    Status { status: u16, response: Box<Response> },

    /// The response body is not valid JSON for the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl RestError {
    /// The response attached to a `Status` or `BodyRead` error.
    pub fn response(&self) -> Option<&Response> {
        match self {
            RestError::Status { response, .. } | RestError::BodyRead { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// Consume the error, yielding the attached response if there is one.
    pub fn into_response(self) -> Option<Response> {
        match self {
            RestError::Status { response, .. } | RestError::BodyRead { response, .. } => {
                Some(*response)
            }
            _ => None,
        }
    }

    /// Status code of a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
