use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domain::ports::UpstreamError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("An API error occurred: {0}")]
    Upstream(String),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ApiError {
    pub fn missing_symbol() -> Self {
        ApiError::Validation("A 'symbol' query parameter is required.".to_string())
    }

    pub fn no_data() -> Self {
        ApiError::NotFound("No data found for this symbol.".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// 上游錯誤一律視為 500，訊息原樣帶出
impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_messages() {
        assert_eq!(
            ApiError::missing_symbol().to_string(),
            "A 'symbol' query parameter is required."
        );
        assert_eq!(
            ApiError::no_data().to_string(),
            "No data found for this symbol."
        );
        assert_eq!(
            ApiError::Upstream("connection refused".into()).to_string(),
            "An API error occurred: connection refused"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::missing_symbol().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::no_data().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Upstream("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_error_conversion_keeps_message() {
        let upstream = UpstreamError::Status {
            status: 401,
            message: "Invalid API key".into(),
        };
        let err = ApiError::from(upstream);
        assert!(err.to_string().starts_with("An API error occurred: "));
        assert!(err.to_string().contains("Invalid API key"));
    }
}
