use thiserror::Error;

/// Client-observable failures of the remote notification service.
///
/// The store treats every variant uniformly (error flag set, data
/// untouched); the helpers exist for presentation surfaces that want to
/// distinguish auth expiry or missing records when reporting to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn http(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        Self::Http {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Missing or expired session token.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }

    /// The server no longer holds the referenced notification.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}
