//! Error responses in the `{"erro": "..."}` format

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const MISSING_TOPIC_MESSAGE: &str = "O campo 'tema' é obrigatório.";
pub const GENERATION_FAILED_MESSAGE: &str = "Não foi possível gerar o conteúdo.";

/// Error body returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub erro: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                erro: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The request carried no `tema` field
    pub fn missing_topic() -> Self {
        Self::bad_request(MISSING_TOPIC_MESSAGE)
    }

    /// The model produced nothing usable
    pub fn generation_failed() -> Self {
        Self::internal(GENERATION_FAILED_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.erro)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_topic_error() {
        let err = ApiError::missing_topic();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.erro, "O campo 'tema' é obrigatório.");
    }

    #[test]
    fn test_generation_failed_error() {
        let err = ApiError::generation_failed();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.response.erro, "Não foi possível gerar o conteúdo.");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::missing_topic();
        let json = serde_json::to_string(&err.response).unwrap();

        assert_eq!(json, r#"{"erro":"O campo 'tema' é obrigatório."}"#);
    }
}
