use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;
use axum::Router;
use axum::http::{Request, Uri};
use axum::routing::any;
use serde_json::{Value, json};
use tower::ServiceExt;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(upstream_url("http://b/api", "jobs/42/quotes", None), "http://b/api/jobs/42/quotes");
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(
        upstream_url("http://b/api/", "/admin/users", Some("page=1&limit=1000")),
        "http://b/api/admin/users?page=1&limit=1000"
    );
}

#[test]
fn upstream_url_drops_empty_query() {
    assert_eq!(upstream_url("http://b/api", "services", Some("")), "http://b/api/services");
}

// =============================================================================
// forward — against a throwaway echo backend
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    if uri.path().ends_with("/missing") {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Job not found" }))).into_response();
    }
    let header_str = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": header_str(header::AUTHORIZATION),
        "content_type": header_str(header::CONTENT_TYPE),
        "cookie": header_str(header::COOKIE),
        "body": String::from_utf8_lossy(&body),
    }))
    .into_response()
}

async fn spawn_backend() -> String {
    let app = Router::new().route("/api/{*rest}", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn state_for(backend_url: String) -> AppState {
    AppState::new(ServerConfig { backend_url, ..ServerConfig::default() }).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn forwards_method_path_query_auth_and_body() {
    let app = api_routes(state_for(spawn_backend().await));
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/admin/users/u1/ban?source=dashboard")
        .header(header::AUTHORIZATION, "Bearer t0k3n")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "sid=abc")
        .body(Body::from(r#"{"user_id":"u1"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let echoed = body_json(response).await;
    assert_eq!(echoed["method"], "PATCH");
    assert_eq!(echoed["uri"], "/api/admin/users/u1/ban?source=dashboard");
    assert_eq!(echoed["authorization"], "Bearer t0k3n");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["cookie"], Value::Null);
    assert_eq!(echoed["body"], r#"{"user_id":"u1"}"#);
}

#[tokio::test]
async fn get_without_body_is_forwarded() {
    let app = api_routes(state_for(spawn_backend().await));
    let request = Request::builder()
        .uri("/api/jobs?page=1&limit=1000")
        .body(Body::empty())
        .unwrap();

    let echoed = body_json(app.oneshot(request).await.unwrap()).await;
    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["uri"], "/api/jobs?page=1&limit=1000");
    assert_eq!(echoed["body"], "");
}

#[tokio::test]
async fn backend_error_status_and_message_pass_through() {
    let app = api_routes(state_for(spawn_backend().await));
    let request = Request::builder().uri("/api/jobs/missing").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Job not found");
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = api_routes(state_for(format!("http://{addr}/api")));
    let request = Request::builder().uri("/api/services").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["message"], "Backend service is unavailable");
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(state_for("http://127.0.0.1:9/api".into()));
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    assert_eq!(app.oneshot(request).await.unwrap().status(), StatusCode::OK);
}
