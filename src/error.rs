//! Client error types

use thiserror::Error;

/// Errors surfaced by the GameNews client
#[derive(Error, Debug)]
pub enum NewsError {
    /// HTTP request could not complete (connection, TLS, or body transfer failure)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request with a non-2xx status
    ///
    /// The message is the server's `error` body field when it sent one,
    /// otherwise a fixed per-operation fallback.
    #[error("server error {status}: {message}")]
    Server {
        /// HTTP status code (e.g. 400, 401, 500)
        status: u16,
        /// Error message from the server, or the operation's fallback
        message: String,
    },

    /// Requested resource does not exist (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON encoding/decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session store backend failure
    #[error("session store error: {0}")]
    Io(#[from] std::io::Error),

    /// A mutating bookmark call for this article id is already outstanding
    #[error("bookmark mutation already in flight for article {0}")]
    MutationInFlight(String),

    /// Client could not be constructed from the given configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using NewsError
pub type Result<T> = std::result::Result<T, NewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = NewsError::Server {
            status: 401,
            message: "Invalid username or password".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server error 401: Invalid username or password"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = NewsError::NotFound("news article 999".to_string());
        assert_eq!(err.to_string(), "not found: news article 999");
    }

    #[test]
    fn test_mutation_in_flight_display() {
        let err = NewsError::MutationInFlight("42".to_string());
        assert_eq!(
            err.to_string(),
            "bookmark mutation already in flight for article 42"
        );
    }
}
