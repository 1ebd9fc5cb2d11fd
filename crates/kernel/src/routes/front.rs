//! Portal shell pages.
//!
//! Every route in the application route table renders inside the shell with
//! the sidebar; anything else lands on the dashboard.

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tracing::debug;

use super::helpers::{NavQuery, build_panel};
use crate::error::AppResult;
use crate::menu::{RouteDefinition, RouteLayout};
use crate::state::AppState;
use crate::theme::PageContent;

/// Landing route for `/` and unknown paths.
pub const DASHBOARD_PATH: &str = "/dashboard";

async fn front() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// Render the shell page for whatever route the path matches.
async fn page(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<NavQuery>,
) -> AppResult<Response> {
    let path = uri.path();

    let Some(matched) = state.routes().match_path(path) else {
        debug!(%path, "no route, redirecting to dashboard");
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    };

    // Visitors are always treated as signed in, so the sign-in screens
    // forward to the dashboard.
    if matched.route.layout == RouteLayout::Auth {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }

    let panel = build_panel(&state, &query)?;
    let body = placeholder_body(&matched.route);
    let html = state.theme().render_page(
        &panel.view(Some(path)),
        &PageContent {
            title: &matched.route.title,
            body: &body,
            role: panel.role(),
        },
    )?;

    Ok(Html(html).into_response())
}

fn placeholder_body(route: &RouteDefinition) -> String {
    if route.pattern == DASHBOARD_PATH {
        "Welcome to your Student Management System Dashboard. \
         From here you can navigate to various modules using the sidebar."
            .to_string()
    } else {
        format!(
            "This is a placeholder page for {}. Content will be added later.",
            route.title
        )
    }
}

/// Create the shell router. Owns the fallback, so merge it last.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(front)).fallback(page)
}
