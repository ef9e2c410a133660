use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use movies_api_core::Error;

use crate::{AppState, error::ApiResult};

/// Reports application status, operating environment and version.
///
/// The body is the bare field list `"status":"available",...` without
/// surrounding braces. Existing clients depend on this exact form.
pub async fn healthcheck(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let environment = serde_json::to_string(&state.config.env).map_err(Error::from)?;
    let version = serde_json::to_string(state.version).map_err(Error::from)?;

    let body = format!(
        r#""status":"available","environment":{},"version":{}"#,
        environment, version
    );

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_helpers::test_server;

    #[tokio::test]
    async fn test_healthcheck_reports_status() {
        let server = test_server();

        let response = server.get("/v1/healthcheck").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.header("content-type"), "application/json");

        let expected = format!(
            r#""status":"available","environment":"testing","version":"{}""#,
            movies_api_core::VERSION
        );
        response.assert_text(expected);
    }

    #[tokio::test]
    async fn test_healthcheck_fields_parse_when_wrapped() {
        let server = test_server();

        let text = server.get("/v1/healthcheck").await.text();
        let parsed: serde_json::Value = serde_json::from_str(&format!("{{{}}}", text)).unwrap();

        assert_eq!(parsed["status"], "available");
        assert_eq!(parsed["environment"], "testing");
        assert_eq!(parsed["version"], movies_api_core::VERSION);
    }

    #[tokio::test]
    async fn test_healthcheck_rejects_post() {
        let server = test_server();

        let response = server.post("/v1/healthcheck").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        response.assert_json(&serde_json::json!({
            "error": "the POST method is not supported for this resource"
        }));
    }
}
