//! Response envelope writer.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::Response,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use movies_api_core::{Result, models::Envelope};

/// Encodes `envelope` as tab-indented JSON and builds the response.
///
/// The body is fully encoded before anything else happens, so an envelope
/// holding an unrepresentable value yields `Err` and no response at all.
/// Caller headers are applied first; `Content-Type` is always forced to
/// `application/json` afterwards.
pub fn write_json(
    status: StatusCode,
    envelope: &Envelope,
    headers: Option<HeaderMap>,
) -> Result<Response> {
    let mut body = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"\t"));
    envelope.serialize(&mut serializer)?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;

    if let Some(headers) = headers {
        response.headers_mut().extend(headers);
    }
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(response)
}
