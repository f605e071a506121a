//! Custom error types for relay operations

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Relay-related errors
#[derive(Error, Debug)]
pub enum RelayError {
    /// Missing required request field
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the absent field
        field: String,
    },

    /// Provider request failed with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Provider error body
        message: String,
    },

    /// Network error while reaching a provider
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying transport error
        message: String,
    },

    /// Provider response did not match the expected shape
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the response
        message: String,
    },

    /// Provider call exceeded its bounded wait
    #[error("Request timeout")]
    TimeoutError,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was wrong with the configuration
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<anyhow::Error> for RelayError {
    fn from(err: anyhow::Error) -> Self {
        RelayError::InternalError(err.to_string())
    }
}

impl RelayError {
    /// HTTP status this error surfaces as
    ///
    /// Only missing request fields produce a 400; everything else that
    /// escapes the pipeline is a 500. Refinement and detection failures are
    /// recovered inside the dispatcher and never reach this mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingField { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_maps_to_bad_request() {
        let err = RelayError::MissingField {
            field: "target".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required field: target");
    }

    #[test]
    fn test_pipeline_errors_map_to_internal_error() {
        let api = RelayError::ApiError {
            status: 502,
            message: "bad gateway".to_string(),
        };
        let timeout = RelayError::TimeoutError;
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(timeout.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: RelayError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, RelayError::InternalError(_)));
    }
}
