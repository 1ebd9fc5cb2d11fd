#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the real application router over the built-in navigation and
//! drives it in-process with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use stms_kernel::menu::{NavConfig, RouteTable};
use stms_kernel::models::Role;
use stms_kernel::theme::ThemeEngine;
use stms_kernel::{AppState, routes};

/// State over the built-in navigation with the given default role.
pub fn test_state(default_role: Role) -> AppState {
    let routes = RouteTable::application();
    let nav = NavConfig::builtin(&routes).unwrap();
    let theme = ThemeEngine::new().unwrap();
    AppState::from_parts(nav, routes, theme, default_role)
}

/// Router with admin as the default role.
pub fn test_app() -> Router {
    routes::app_router(test_state(Role::Admin))
}

/// Response parts worth asserting on.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get("location")
            .and_then(|v| v.to_str().ok())
    }
}

/// Issue a GET request.
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
