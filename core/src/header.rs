//! Header fields and optional Basic credentials applied to outgoing requests.
//!
//! # Design
//! Fields are kept as plain `(name, value)` pairs in insertion order and are
//! only validated when applied to a request, so `add`/`set` never fail.
//! Names compare case-insensitively.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ureq::http::header::{HeaderName, HeaderValue, AUTHORIZATION};
use ureq::http::Request;

/// Header fields plus optional Basic Authentication credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    username: String,
    password: String,
    fields: Vec<(String, String)>,
}

impl Header {
    /// A header without credentials.
    pub fn basic() -> Self {
        Self::default()
    }

    /// A header that sends Basic credentials on every call.
    pub fn auth(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            fields: Vec::new(),
        }
    }

    /// Append a value to `name`, keeping any existing values.
    pub fn add(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    /// Replace every value of `name` with `value`.
    pub fn set(&mut self, name: &str, value: &str) {
        self.del(name);
        self.add(name, value);
    }

    /// First value of `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values of `name` in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Remove `name` entirely.
    pub fn del(&mut self, name: &str) {
        self.fields.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        if self.username.is_empty() || self.password.is_empty() {
            return None;
        }
        Some((&self.username, &self.password))
    }

    /// Copy every field onto `request`, then set Basic credentials if both
    /// username and password are non-empty.
    pub(crate) fn apply_to<B>(&self, request: &mut Request<B>) -> Result<(), ureq::http::Error> {
        let headers = request.headers_mut();
        for (name, value) in &self.fields {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            headers.append(name, HeaderValue::from_str(value)?);
        }
        if let Some((username, password)) = self.credentials() {
            let token = STANDARD.encode(format!("{username}:{password}"));
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Basic {token}"))?);
        }
        Ok(())
    }
}
