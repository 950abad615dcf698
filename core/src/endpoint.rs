//! A fixed URL restricted to an allow-list of verbs.
//!
//! # Design
//! `Endpoint` is immutable after construction and holds only the URL, the
//! allow-list and a transport agent. Each verb goes through one shared
//! routine: allow-list check, JSON encoding, request construction, header
//! application, dispatch, and finally `Response` classification. Every stage
//! before dispatch fails without touching the network.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};
use ureq::http::header::{HeaderValue, CONTENT_TYPE};
use ureq::http::Request;
use ureq::Agent;

use crate::error::{RestError, Result};
use crate::header::Header;
use crate::method::Method;
use crate::response::Response;

/// A REST endpoint on one URL, answering only the verbs it was built with.
#[derive(Clone)]
pub struct Endpoint {
    url: String,
    methods: HashSet<Method>,
    agent: Agent,
}

/// Agent used by `Endpoint::new`. Non-2xx statuses come back as responses
/// so `Response` can classify them.
fn default_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

impl Endpoint {
    /// Bind `url` (stored verbatim) to the given verbs.
    pub fn new(url: &str, methods: impl IntoIterator<Item = Method>) -> Self {
        Self::with_agent(default_agent(), url, methods)
    }

    /// Like `new`, dispatching through a caller-configured agent.
    ///
    /// The agent should have `http_status_as_error` disabled, otherwise
    /// unsuccessful statuses surface as `RestError::Transport`.
    pub fn with_agent(agent: Agent, url: &str, methods: impl IntoIterator<Item = Method>) -> Self {
        Self {
            url: url.to_string(),
            methods: methods.into_iter().collect(),
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn allows(&self, method: Method) -> bool {
        self.methods.contains(&method)
    }

    pub fn get(&self, header: &Header) -> Result<Response> {
        self.call::<()>(Method::Get, header, None)
    }

    pub fn delete(&self, header: &Header) -> Result<Response> {
        self.call::<()>(Method::Delete, header, None)
    }

    /// PUT the JSON encoding of `body`.
    pub fn put<B: Serialize + ?Sized>(&self, header: &Header, body: &B) -> Result<Response> {
        self.call(Method::Put, header, Some(body))
    }

    /// POST the JSON encoding of `body`.
    pub fn post<B: Serialize + ?Sized>(&self, header: &Header, body: &B) -> Result<Response> {
        self.call(Method::Post, header, Some(body))
    }

    fn call<B: Serialize + ?Sized>(
        &self,
        method: Method,
        header: &Header,
        body: Option<&B>,
    ) -> Result<Response> {
        if !self.allows(method) {
            debug!(%method, url = %self.url, "method not allowed on endpoint");
            return Err(RestError::UnsupportedMethod {
                method,
                url: self.url.clone(),
            });
        }

        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(RestError::Serialization)?;

        let builder = Request::builder()
            .method(ureq::http::Method::from(method))
            .uri(self.url.as_str());

        debug!(%method, url = %self.url, "sending request");
        let result = match payload {
            None => {
                let mut request = builder.body(())?;
                header.apply_to(&mut request)?;
                self.agent.run(request)
            }
            Some(bytes) => {
                let mut request = builder.body(bytes)?;
                header.apply_to(&mut request)?;
                let headers = request.headers_mut();
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                self.agent.run(request)
            }
        };

        let raw = result.map_err(|e| {
            warn!(%method, url = %self.url, error = %e, "transport failure");
            RestError::Transport(e)
        })?;
        debug!(%method, url = %self.url, status = raw.status().as_u16(), "received response");

        Response::from_exchange(Some(&self.url), raw.map(|body| body.into_reader()))
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}
