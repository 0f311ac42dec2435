// src/internal/http/client.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

use crate::internal::config::HttpConfig;

use super::error::RequestError;
use super::response::{HttpResponse, Outcome};

/// Report of one completed download.
#[derive(Debug, Clone)]
pub struct Download {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Request helper set bound to one explicitly constructed reqwest client.
///
/// Each helper wraps one request variant: build the request, perform the
/// round trip, classify any failure, return an [`Outcome`]. Failures are
/// logged exactly once and never surface any other way; helpers do not
/// panic. There are no retries and no shared mutable state between calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    /// Build a client from configuration. The configured timeout applies to
    /// every call unless a helper overrides it per request.
    pub fn new(cfg: &HttpConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self { http })
    }

    /// Basic GET request.
    pub async fn get(&self, url: &str) -> Outcome {
        self.perform("GET", url, Ok(self.http.get(url))).await
    }

    /// GET with query parameters appended to the URL.
    pub async fn get_with_params(&self, url: &str, params: &HashMap<String, String>) -> Outcome {
        self.perform("GET", url, Ok(self.http.get(url).query(params))).await
    }

    /// POST `data` as a JSON body. `Content-Type: application/json` is the
    /// default; caller headers win on key collisions.
    pub async fn post_json(
        &self,
        url: &str,
        data: &Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Outcome {
        let request = merge_headers(Some((CONTENT_TYPE, "application/json")), headers)
            .map(|merged| self.http.post(url).headers(merged).json(data));
        self.perform("POST", url, request).await
    }

    /// POST `fields` form-encoded. `Content-Type:
    /// application/x-www-form-urlencoded` is the default; caller headers win
    /// on key collisions.
    pub async fn post_form(
        &self,
        url: &str,
        fields: &HashMap<String, String>,
        headers: Option<&HashMap<String, String>>,
    ) -> Outcome {
        let default = (CONTENT_TYPE, "application/x-www-form-urlencoded");
        let request = merge_headers(Some(default), headers)
            .map(|merged| self.http.post(url).headers(merged).form(fields));
        self.perform("POST", url, request).await
    }

    /// PUT `data` as a JSON body.
    pub async fn put_json(&self, url: &str, data: &Value) -> Outcome {
        self.perform("PUT", url, Ok(self.http.put(url).json(data))).await
    }

    /// DELETE request.
    pub async fn delete(&self, url: &str) -> Outcome {
        self.perform("DELETE", url, Ok(self.http.delete(url))).await
    }

    /// GET carrying only the caller's headers; no variant defaults.
    pub async fn get_with_headers(&self, url: &str, headers: &HashMap<String, String>) -> Outcome {
        let request = merge_headers(None, Some(headers))
            .map(|merged| self.http.get(url).headers(merged));
        self.perform("GET", url, request).await
    }

    /// GET with a per-request timeout overriding the client default. An
    /// elapsed timeout is reported the same way as any transport failure.
    pub async fn get_with_timeout(&self, url: &str, timeout: Duration) -> Outcome {
        self.perform("GET", url, Ok(self.http.get(url).timeout(timeout))).await
    }

    /// GET `url` and stream the body into `dest`, overwriting any existing
    /// file. Bytes are written chunk by chunk as they arrive, so the body is
    /// never buffered whole. Local write failures are reported separately
    /// from transport failures.
    pub async fn download_file(&self, url: &str, dest: &Path) -> Result<Download, RequestError> {
        let result = self.stream_to_file(url, dest).await;
        match &result {
            Ok(download) => info!(
                "File downloaded successfully to {} ({} bytes)",
                download.path.display(),
                download.bytes
            ),
            Err(err) => error!("Error downloading file: {err}"),
        }
        result
    }

    /// Run one round trip through the shared chokepoint, logging a single
    /// diagnostic line on failure. `request` is a `Result` so that header
    /// construction errors flow through the same path as transport errors.
    async fn perform(
        &self,
        method: &str,
        url: &str,
        request: Result<reqwest::RequestBuilder, RequestError>,
    ) -> Outcome {
        let outcome = match request {
            Ok(builder) => self.round_trip(method, url, builder).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            error!("Error making {method} request to {url}: {err}");
        }
        outcome
    }

    async fn round_trip(
        &self,
        method: &str,
        url: &str,
        builder: reqwest::RequestBuilder,
    ) -> Outcome {
        info!("Executing request: {method} {url}");
        let started = Instant::now();

        let response = builder.send().await?;
        let final_url = response.url().to_string();
        let status = response.status();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await?.to_vec();
        let elapsed = started.elapsed();

        // Any 4xx/5xx counts as a failed round trip, matching the helper
        // contract: callers only ever see a response that succeeded.
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                url: final_url,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
            elapsed,
        })
    }

    async fn stream_to_file(&self, url: &str, dest: &Path) -> Result<Download, RequestError> {
        info!("Executing request: GET {url} (streamed)");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let final_url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                status: status.as_u16(),
                url: final_url,
                body,
            });
        }

        // The handle lives only in this scope and is dropped on every exit
        // path, completed or not.
        let mut file = File::create(dest)
            .await
            .map_err(|source| file_error(dest, source))?;
        let mut written = 0u64;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)
                .await
                .map_err(|source| file_error(dest, source))?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|source| file_error(dest, source))?;

        Ok(Download {
            path: dest.to_path_buf(),
            bytes: written,
        })
    }
}

fn file_error(path: &Path, source: std::io::Error) -> RequestError {
    RequestError::File {
        path: path.to_path_buf(),
        source,
    }
}

/// Build the header map for one request: caller-supplied headers first,
/// then the variant default only where the caller did not already cover
/// that key. Header names are matched case-insensitively.
fn merge_headers(
    default: Option<(HeaderName, &'static str)>,
    caller: Option<&HashMap<String, String>>,
) -> Result<HeaderMap, RequestError> {
    let mut merged = HeaderMap::new();

    if let Some(extra) = caller {
        for (key, value) in extra {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| RequestError::Header {
                name: key.clone(),
                reason: e.to_string(),
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| RequestError::Header {
                name: key.clone(),
                reason: e.to_string(),
            })?;
            merged.insert(name, value);
        }
    }

    if let Some((name, value)) = default {
        if !merged.contains_key(&name) {
            merged.insert(name, HeaderValue::from_static(value));
        }
    }

    Ok(merged)
}

fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}
