//! Boundary error type.

use mutascan_core::ScanError;
use thiserror::Error;

/// Errors raised while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body has the wrong shape; the caller can fix it.
    #[error("{0}")]
    Validation(String),

    /// Anything else went wrong while serving the request.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<ScanError> for ApiError {
    fn from(e: ScanError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Validation(format!("invalid JSON body: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::Validation("x".into()).status(), 400);
        assert_eq!(ApiError::Internal("x".into()).status(), 500);
    }

    #[test]
    fn scan_error_is_internal() {
        let err: ApiError = ScanError::InvalidInput("run length must be at least 1".into()).into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.to_string(), "invalid input: run length must be at least 1");
    }

    #[test]
    fn json_error_is_validation() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(json_err);
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.to_string().starts_with("invalid JSON body: "));
    }
}
