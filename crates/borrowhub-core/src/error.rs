use thiserror::Error;

/// Errors produced while validating or converting domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid notification kind: {0}")]
    InvalidKind(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CoreError {
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidKind(kind.into())
    }
}

/// Convenience result type for domain operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_kind_message() {
        let err = CoreError::invalid_kind("Urgent");
        assert_eq!(err.to_string(), "Invalid notification kind: Urgent");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::JsonError(_)));
    }
}
