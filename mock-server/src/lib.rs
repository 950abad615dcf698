use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    pub requests: usize,
}

pub type Counter = Arc<AtomicUsize>;

pub fn app() -> Router {
    let counter: Counter = Arc::new(AtomicUsize::new(0));
    Router::new()
        .route("/respond/{code}/{text}", any(respond))
        .route("/echo", any(echo))
        .route("/whoami", any(whoami))
        .route("/headers", any(headers))
        .route("/created", post(created))
        .route("/stats", get(stats))
        .with_state(counter)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    tracing::info!(addr = ?listener.local_addr().ok(), "mock server listening");
    axum::serve(listener, app()).await
}

async fn respond(
    State(counter): State<Counter>,
    Path((code, text)): Path<(u16, String)>,
) -> Result<impl IntoResponse, StatusCode> {
    counter.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    let body = serde_json::to_vec(&text).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok((
        status,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::LOCATION, "http://localhost"),
        ],
        body,
    ))
}

async fn echo(State(counter): State<Counter>, body: Bytes) -> Bytes {
    counter.fetch_add(1, Ordering::SeqCst);
    body
}

/// Reflects the request's Basic credentials as `username:password`.
async fn whoami(State(counter): State<Counter>, headers: HeaderMap) -> String {
    counter.fetch_add(1, Ordering::SeqCst);
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(|token| STANDARD.decode(token).ok())
        .and_then(|raw| String::from_utf8(raw).ok())
        .unwrap_or_else(|| ":".to_string())
}

async fn headers(
    State(counter): State<Counter>,
    headers: HeaderMap,
) -> Json<BTreeMap<String, Vec<String>>> {
    counter.fetch_add(1, Ordering::SeqCst);
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in &headers {
        out.entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    Json(out)
}

async fn created(State(counter): State<Counter>, body: Bytes) -> impl IntoResponse {
    counter.fetch_add(1, Ordering::SeqCst);
    (StatusCode::CREATED, [(header::LOCATION, "/items/1")], body)
}

async fn stats(State(counter): State<Counter>) -> Json<Stats> {
    Json(Stats {
        requests: counter.load(Ordering::SeqCst),
    })
}
