//! TfL client error types.

/// Errors from the TfL journey planner client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("TfL API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, kept for debugging.
        body: Option<String>,
    },

    /// The response contained no journeys at all
    #[error(
        "no tube journey found; the locations may be outside the TfL network or too close together"
    )]
    NoJourney,
}
