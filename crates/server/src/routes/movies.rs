use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::Response,
};

use movies_api_core::models::{CreateMovie, Envelope, Movie};

use crate::error::{ApiError, ApiResult};
use crate::json::write_json;
use crate::params::IdParam;

/// Echoes a submitted movie back to the client.
///
/// Nothing is stored yet; this only validates that the body decodes.
pub async fn create(payload: Result<Json<CreateMovie>, JsonRejection>) -> ApiResult<Response> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    tracing::debug!("Received movie submission: {}", input.title);

    Ok(write_json(
        StatusCode::OK,
        &Envelope::new().with("movie", &input),
        None,
    )?)
}

pub async fn show(IdParam(id): IdParam) -> ApiResult<Response> {
    let movie = Movie::placeholder(id);

    Ok(write_json(
        StatusCode::OK,
        &Envelope::new().with("movie", &movie),
        None,
    )?)
}
