//! Fully buffered wrapper around a completed HTTP exchange.
//!
//! # Design
//! The body is drained exactly once, at construction, and the raw response is
//! kept with a unit body. Construction always produces a `Response`; when the
//! status is anything other than 200 or 201 it is handed back inside
//! `RestError::Status` so the error body can still be read.

use std::io::Read;

use serde::de::DeserializeOwned;
use ureq::http::header::LOCATION;
use url::Url;

use crate::error::{RestError, Result};

/// A completed exchange with its body held in memory.
#[derive(Debug)]
pub struct Response {
    location: String,
    body: Vec<u8>,
    raw: ureq::http::Response<()>,
}

impl Response {
    /// Wrap `raw`, draining its body.
    ///
    /// Returns `RestError::Status` carrying the wrapped response unless the
    /// status is 200 or 201. A success whose body fails to drain returns
    /// `RestError::BodyRead` carrying the bytes read so far.
    pub fn new<R: Read>(raw: ureq::http::Response<R>) -> Result<Self> {
        Self::from_exchange(None, raw)
    }

    /// Like `new`, resolving a relative `Location` against `request_url`.
    /// After a followed redirect this is still the URL the call started from.
    pub(crate) fn from_exchange<R: Read>(
        request_url: Option<&str>,
        raw: ureq::http::Response<R>,
    ) -> Result<Self> {
        let (parts, mut reader) = raw.into_parts();
        let mut body = Vec::new();
        let read = reader.read_to_end(&mut body);

        let raw = ureq::http::Response::from_parts(parts, ());
        let location = raw
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|loc| resolve_location(request_url, loc))
            .unwrap_or_default();

        let response = Response { location, body, raw };
        if response.is_success() {
            return match read {
                Ok(_) => Ok(response),
                Err(source) => Err(RestError::BodyRead {
                    source,
                    response: Box::new(response),
                }),
            };
        }
        Err(RestError::Status {
            status: response.status(),
            response: Box::new(response),
        })
    }

    /// The `Location` header as an absolute URL, or `""` if absent or
    /// unparseable.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn status(&self) -> u16 {
        self.raw.status().as_u16()
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status(), 200 | 201)
    }

    /// Decode the buffered body as JSON.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(RestError::Deserialization)
    }

    /// The underlying response. Its body has already been drained; read it
    /// through `body` or `unmarshal`.
    pub fn http_response(&self) -> &ureq::http::Response<()> {
        &self.raw
    }
}

/// Absolute locations are kept verbatim; relative ones need a base.
fn resolve_location(base: Option<&str>, location: &str) -> Option<String> {
    if Url::parse(location).is_ok() {
        return Some(location.to_string());
    }
    let base = Url::parse(base?).ok()?;
    base.join(location).ok().map(String::from)
}
