use std::fmt::Display;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use movies_api_core::models::Envelope;

use crate::json::write_json;

const SERVER_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";
const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";

/// Sends `{"error": message}` with the given status.
///
/// An error envelope only ever holds a string, so encoding it does not fail
/// in practice. The `Err` arm is a guard: it logs and returns a bare 500 with
/// an empty body, and never attempts a second envelope.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    match write_json(status, &Envelope::error(message), None) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to write error response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Logs the underlying error and answers with a generic 500 message.
pub fn server_error_response(err: impl Display) -> Response {
    tracing::error!("{:#}", err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
}

pub fn not_found_response() -> Response {
    error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

pub fn method_not_allowed_response(method: &Method) -> Response {
    let message = format!("the {} method is not supported for this resource", method);
    error_response(StatusCode::METHOD_NOT_ALLOWED, message)
}

/// Echoes the error text, which originates from client input.
pub fn bad_request_response(err: impl Display) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

/// Unified API error type for handlers
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound,
    MethodNotAllowed(Method),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => bad_request_response(message),
            ApiError::NotFound => not_found_response(),
            ApiError::MethodNotAllowed(method) => method_not_allowed_response(&method),
            ApiError::Internal(err) => server_error_response(err),
        }
    }
}

/// Convert from core errors to API errors
impl From<movies_api_core::Error> for ApiError {
    fn from(err: movies_api_core::Error) -> Self {
        match err.status_code() {
            404 => ApiError::NotFound,
            _ if err.is_client_error() => ApiError::BadRequest(err.to_string()),
            _ => ApiError::Internal(err.into()),
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_server_error_hides_details() {
        let err = std::io::Error::other("connection refused: db password=hunter2");
        let response = server_error_response(&err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({ "error": "the server encountered a problem and could not process your request" })
        );
        assert!(!body.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = not_found_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "the requested resource could not be found" })
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed_names_method() {
        let response = method_not_allowed_response(&Method::DELETE);
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "the DELETE method is not supported for this resource" })
        );
    }

    #[tokio::test]
    async fn test_bad_request_echoes_message() {
        let err = std::io::Error::other("missing field");
        let response = bad_request_response(err);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let compact: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(compact.to_string(), r#"{"error":"missing field"}"#);
    }

    #[tokio::test]
    async fn test_core_errors_map_to_responses() {
        let response = ApiError::from(movies_api_core::Error::InvalidIdParameter).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let inner = serde_json::from_str::<Value>("[").unwrap_err();
        let response = ApiError::from(movies_api_core::Error::from(inner)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "the server encountered a problem and could not process your request"
        );
    }
}
