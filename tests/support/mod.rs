//! Shared test support: a local axum stand-in for the public echo service.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::{any, delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Bind `app` on an ephemeral local port and serve it in the background.
pub async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Spawn the echo app and return its address.
pub async fn spawn_echo() -> SocketAddr {
    spawn_app(echo_app()).await
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}

/// Echo service with the route surface the demonstration sequence uses.
pub fn echo_app() -> Router {
    Router::new()
        .route("/get", get(echo))
        .route("/post", post(echo))
        .route("/put", put(echo))
        .route("/delete", delete(echo))
        .route("/headers", get(headers_only))
        .route("/status/{code}", any(status))
        .route("/delay/{secs}", get(delay))
        .route("/bytes/{n}", get(bytes))
}

/// Deterministic binary payload of `n` bytes.
pub fn payload(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 251) as u8).collect()
}

/// Reflect the request back as JSON: method, URL, query args, headers,
/// raw body, plus form/json views of the body where they parse.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let form = if content_type.starts_with("application/x-www-form-urlencoded") {
        Value::Object(pairs(std::str::from_utf8(&body).unwrap_or_default()))
    } else {
        json!({})
    };

    Json(json!({
        "args": Value::Object(pairs(uri.query().unwrap_or_default())),
        "data": String::from_utf8_lossy(&body),
        "form": form,
        "json": serde_json::from_slice::<Value>(&body).ok(),
        "headers": header_map(&headers),
        "method": method.as_str(),
        "url": uri.to_string(),
    }))
}

async fn headers_only(headers: HeaderMap) -> Json<Value> {
    Json(json!({ "headers": header_map(&headers) }))
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn delay(Path(secs): Path<u64>) -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(secs)).await;
    Json(json!({ "delayed": secs }))
}

async fn bytes(Path(n): Path<usize>) -> Vec<u8> {
    payload(n)
}

fn header_map(headers: &HeaderMap) -> serde_json::Map<String, Value> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), Value::String(v.to_string())))
        })
        .collect()
}

/// Parse `k=v&k2=v2` pairs; no percent-decoding, test inputs stay plain.
fn pairs(query: &str) -> serde_json::Map<String, Value> {
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.split_once('='))
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}
