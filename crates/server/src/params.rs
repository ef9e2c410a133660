//! Path parameter parsing.

use axum::{
    extract::{FromRequestParts, RawPathParams},
    http::request::Parts,
    response::Response,
};

use movies_api_core::{Error, Result};

use crate::error::not_found_response;

/// Parses a resource identifier: a base-10 `i64` that is at least 1.
pub fn parse_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(Error::InvalidIdParameter),
    }
}

/// Reads the `id` path parameter. A route without one yields the same
/// invalid-id error as a malformed value.
pub fn read_id_param(params: &RawPathParams) -> Result<i64> {
    let raw = params
        .iter()
        .find(|(key, _)| *key == "id")
        .map(|(_, value)| value)
        .unwrap_or_default();

    parse_id(raw)
}

/// Extractor for a validated `id` path parameter.
///
/// Rejects with the standard 404 envelope, since an invalid identifier can
/// never match a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i64);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to read path parameters: {}", e);
                not_found_response()
            })?;

        read_id_param(&params).map(IdParam).map_err(|e| {
            tracing::debug!("Rejected id parameter for {}: {}", parts.uri, e);
            not_found_response()
        })
    }
}
