//! Navigation endpoints.
//!
//! `/api/nav` returns the role-filtered tree as JSON; `/nav` renders the
//! sidebar fragment.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use super::helpers::{NavQuery, build_panel, resolve_role};
use crate::error::AppResult;
use crate::menu::VisibleNav;
use crate::state::AppState;

/// Role-filtered navigation tree.
async fn nav_json(
    State(state): State<AppState>,
    Query(query): Query<NavQuery>,
) -> AppResult<Json<VisibleNav>> {
    let role = resolve_role(&state, query.role.as_deref())?;
    let nav = state.nav().filter_for_role(role);
    debug!(%role, visible = nav.len(), "serving navigation tree");
    Ok(Json(nav))
}

/// Rendered sidebar fragment.
async fn nav_html(
    State(state): State<AppState>,
    Query(query): Query<NavQuery>,
) -> AppResult<Html<String>> {
    let panel = build_panel(&state, &query)?;
    let html = state
        .theme()
        .render_sidebar(&panel.view(query.current.as_deref()))?;
    Ok(Html(html))
}

/// Create the navigation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/nav", get(nav_json))
        .route("/nav", get(nav_html))
}
