use std::path::PathBuf;

/// Failure produced by a request helper.
///
/// Transport problems and error statuses are separate variants so callers
/// can tell "the server never answered" from "the server answered with an
/// error", even though the demonstration flow treats both as an absent
/// response.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// DNS, connect, TLS, or timeout failure before a usable response,
    /// including requests that could not be built (e.g. an empty URL).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The response body is
    /// kept for inspection but excluded from the one-line diagnostic.
    #[error("HTTP {status} returned from {url}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// A caller-supplied header could not be turned into a valid header
    /// name/value pair.
    #[error("invalid header `{name}`: {reason}")]
    Header { name: String, reason: String },

    /// Downloaded bytes could not be written to the local target.
    #[error("failed to write {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
