use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use super::error::RequestError;

/// Result of one helper invocation: either a populated response or an
/// error description. Callers must match on it before touching the body.
pub type Outcome = Result<HttpResponse, RequestError>;

/// One completed round trip, status through body, plus how long it took.
///
/// Exists only for the duration of one request/print cycle; nothing is
/// cached or reused across calls.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    pub elapsed: Duration,
}

impl HttpResponse {
    /// Body as UTF-8 text, with invalid bytes replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
