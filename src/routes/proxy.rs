//! Reverse proxy for dashboard API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser issues every REST call against the same origin under `/api`.
//! This handler replays the call against the configured backend root, keeping
//! method, path, query string, body and the handful of headers the backend
//! cares about (notably the bearer token). Responses are relayed as-is.
//!
//! ERROR HANDLING
//! ==============
//! Backend HTTP errors are not errors here; their status and JSON body pass
//! through untouched so the client can show the backend's `message`. Only
//! transport failures become [`ProxyError`], answered with a JSON `{message}`
//! body so the client's error path stays uniform.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        let body = serde_json::json!({ "message": "Backend service is unavailable" });
        (self.status(), Json(body)).into_response()
    }
}

/// Join the backend root, the captured `/api/*` tail and the raw query.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

/// `ANY /api/{*path}` — forward to `{BACKEND_URL}/{path}`.
///
/// # Errors
///
/// Returns [`ProxyError`] when the backend cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.backend_url, &path, query.as_deref());

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    tracing::debug!(%method, path = %path, status = status.as_u16(), "proxied api call");

    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}
