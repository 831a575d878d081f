use thiserror::Error;

/// Errors returned by the `YouTube` Data API client.
///
/// `Ok(None)` from the client operations means "confirmed absent" (the API
/// answered with zero results); every variant here means the outcome is
/// unknown and must not be conflated with absence.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status; `body` carries the response
    /// text for diagnostics.
    #[error("YouTube API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The configured base URL could not be parsed or joined with an
    /// endpoint path.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
