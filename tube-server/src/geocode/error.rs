//! Geocoder client error types.

/// Errors from the Nominatim HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Geocoder returned an error status code
    #[error("geocoder error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be interpreted
    #[error("geocoder response error: {message}")]
    Json { message: String },

    /// No candidates for the given address.
    ///
    /// Carries the caller's original input, not the London-qualified
    /// query that was actually sent.
    #[error("could not find location: \"{address}\". Try a more specific address.")]
    NotFound { address: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_references_original_address() {
        let err = GeocodeError::NotFound {
            address: "Bakre Street".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not find location: \"Bakre Street\". Try a more specific address."
        );
    }

    #[test]
    fn api_error_carries_status() {
        let err = GeocodeError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "geocoder error 503: Service Unavailable");
    }
}
