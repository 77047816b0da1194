//! Error handling for the HTTP client.

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document on line {line}: {reason}")]
    InvalidDocument { line: usize, reason: String },

    #[error("credentials contain characters not allowed in HTTP headers")]
    InvalidCredentials,

    #[error("engine error: {0}")]
    Engine(#[from] docsync_engine::Error),
}

impl ClientError {
    /// Returns true if the API rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Api { status: 401 | 403, .. })
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ClientError::Api {
            status: 403,
            message: "Invalid Application-ID or API key".into(),
        };
        assert_eq!(
            err.to_string(),
            "search API returned 403: Invalid Application-ID or API key"
        );
        assert!(err.is_auth_error());
    }

    #[test]
    fn other_errors_are_not_auth() {
        let err = ClientError::Api {
            status: 429,
            message: "Too many requests".into(),
        };
        assert!(!err.is_auth_error());
        assert!(!ClientError::InvalidCredentials.is_auth_error());
    }
}
