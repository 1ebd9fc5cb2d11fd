#![allow(clippy::unwrap_used, clippy::expect_used)]
//! HTTP endpoint tests against the in-process router.

mod common;

use axum::http::StatusCode;
use common::{get, test_app};

#[tokio::test]
async fn health_reports_loaded_navigation() {
    let app = test_app();
    let response = get(&app, "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["nav_entries"], 10);
    assert_eq!(json["routes"], 17);
}

#[tokio::test]
async fn api_nav_filters_by_role() {
    let app = test_app();
    let response = get(&app, "/api/nav?role=parent").await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["role"], "parent");
    assert_eq!(json["main"].as_array().unwrap().len(), 2);
    assert_eq!(json["main"][1]["children"][0]["label"], "My Grades");
    assert_eq!(json["settings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn api_nav_defaults_to_configured_role() {
    let app = test_app();
    let json = get(&app, "/api/nav").await.json();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["settings"][0]["path"], "/system-settings");
}

#[tokio::test]
async fn api_nav_rejects_unknown_role() {
    let app = test_app();
    let response = get(&app, "/api/nav?role=janitor").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("unknown role: janitor"));
}

#[tokio::test]
async fn sidebar_fragment_honors_expanded_and_current() {
    let app = test_app();
    let response = get(&app, "/nav?role=teacher&expanded=main.2&current=/grades/entry").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"href="/subjects""#));
    assert!(response.body.contains(r#"aria-current="page""#));
    assert!(!response.body.contains("User Management"));
}

#[tokio::test]
async fn sidebar_fragment_rejects_bad_node_id() {
    let app = test_app();
    let response = get(&app, "/nav?expanded=drawer.1").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn root_redirects_to_dashboard() {
    let app = test_app();
    let response = get(&app, "/").await;
    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("/dashboard"));
}

#[tokio::test]
async fn unknown_path_redirects_to_dashboard() {
    let app = test_app();
    let response = get(&app, "/attendance").await;
    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("/dashboard"));
}

#[tokio::test]
async fn sign_in_routes_forward_to_dashboard() {
    let app = test_app();
    for path in ["/login", "/register", "/forgot-password"] {
        let response = get(&app, path).await;
        assert_eq!(response.location(), Some("/dashboard"), "{path}");
    }
}

#[tokio::test]
async fn shell_page_renders_with_sidebar() {
    let app = test_app();
    let response = get(&app, "/users/edit/42?role=super_admin").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1>Edit User</h1>"));
    assert!(response.body.contains("placeholder page for Edit User"));
    assert!(response.body.contains(r#"data-role="super_admin""#));
    assert!(response.body.contains("System Settings"));
}

#[tokio::test]
async fn dashboard_highlights_its_link() {
    let app = test_app();
    let response = get(&app, "/dashboard?role=student").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Welcome to your Student Management System Dashboard."));
    assert!(response.body.contains(r#"aria-current="page""#));
    assert!(!response.body.contains("Fees Management"));
}

#[tokio::test]
async fn api_nav_carries_icons() {
    let app = test_app();
    let json = get(&app, "/api/nav?role=student").await.json();
    assert_eq!(json["main"][0]["icon"], "dashboard");
}

#[tokio::test]
async fn nested_page_highlights_its_section_link() {
    let app = test_app();
    let response = get(&app, "/users/edit/42?role=admin").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .body
            .contains(r#"href="/users" aria-current="page""#)
    );
    assert!(!response.body.contains(r#"href="/dashboard" aria-current="page""#));
}

#[tokio::test]
async fn trailing_slash_and_case_reach_the_route() {
    let app = test_app();

    let response = get(&app, "/users/?role=admin").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1>User Management</h1>"));

    let response = get(&app, "/Dashboard?role=admin").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1>Dashboard</h1>"));
}

#[tokio::test]
async fn toggle_link_keeps_current_location() {
    let app = test_app();
    let response = get(&app, "/nav?role=admin&current=/subjects").await;
    assert_eq!(response.status, StatusCode::OK);

    // Follow the Academic Management toggle, which expands the group
    let body = &response.body;
    let start = body.find(r#"href="?"#).unwrap() + r#"href=""#.len();
    let end = start + body[start..].find('"').unwrap();
    let toggle = body[start..end].replace("&amp;", "&");
    assert!(toggle.contains("expanded=main.2"), "{toggle}");

    let response = get(&app, &format!("/nav{toggle}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .body
            .contains(r#"href="/subjects" aria-current="page""#)
    );
}

#[tokio::test]
async fn sidebar_fragment_accepts_variant() {
    let app = test_app();

    let response = get(&app, "/nav?variant=temporary").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("sidebar-temporary"));

    let response = get(&app, "/nav").await;
    assert!(response.body.contains("sidebar-permanent"));

    let response = get(&app, "/nav?variant=floating").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
