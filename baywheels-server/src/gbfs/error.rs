//! GBFS client error types.

/// Errors that can occur when fetching GBFS feeds.
#[derive(Debug, thiserror::Error)]
pub enum GbfsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Snippet of the offending body, kept for debugging.
        body: Option<String>,
    },

    /// Discovery succeeded but the named feed is absent
    #[error("feed {0} not found in discovery document")]
    FeedNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GbfsError::FeedNotFound("free_bike_status".into());
        assert_eq!(
            err.to_string(),
            "feed free_bike_status not found in discovery document"
        );

        let err = GbfsError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = GbfsError::Json {
            message: "expected value at line 1".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected value"));
    }
}
