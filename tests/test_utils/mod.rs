//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};
use axum::http::{Request, Response};
use tower::util::ServiceExt;

use wedding_site::api::AppState;
use wedding_site::api::app;
use wedding_site::core::AppConfig;
use wedding_site::dashboard::DashboardConfig;

pub const TEST_PASSWORD: &str = "forever-and-always";

/// Creates a test application router whose spreadsheet endpoints all
/// live on `upstream_url`, typically a `mockito` server, under
/// `/guests`, `/guest-requests`, `/entourage` and `/principal-sponsor`.
pub fn test_app(upstream_url: &str) -> Router {
    let app_config = AppConfig {
        guests_url: format!("{}/guests", upstream_url),
        guest_requests_url: format!("{}/guest-requests", upstream_url),
        entourage_url: format!("{}/entourage", upstream_url),
        principal_sponsor_url: format!("{}/principal-sponsor", upstream_url),
        static_dir: String::from("./public"),
        dashboard: DashboardConfig::new(TEST_PASSWORD),
    };
    app(Arc::new(AppState::new(app_config)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}

/// Send a JSON request to the app
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .method(method)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}
