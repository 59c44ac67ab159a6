//! Domain-level error types.

use std::time::Duration;

use thiserror::Error;

/// Domain errors - input rejected before anything reaches the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid post id: {0}")]
    InvalidId(String),
}

/// Backend call errors.
///
/// Pages collapse every variant into "operation failed"; the distinction is
/// kept for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Backend unreachable: {0}")]
    Transport(String),

    #[error("Resource not found")]
    NotFound,

    #[error(
        "Backend responded with status {status}{}",
        .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
    )]
    Status { status: u16, detail: Option<String> },

    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_detail() {
        let err = ApiError::Status {
            status: 500,
            detail: Some("Post missing".to_string()),
        };
        assert_eq!(err.to_string(), "Backend responded with status 500: Post missing");

        let bare = ApiError::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(bare.to_string(), "Backend responded with status 502");
    }
}
