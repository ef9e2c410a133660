pub mod healthcheck;
pub mod movies;

use axum::http::Method;

use crate::error::ApiError;

/// Fallback for paths no route matches
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known paths requested with an unsupported method
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}
