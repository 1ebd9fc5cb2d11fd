//! HTTP route handlers.

pub mod front;
pub mod health;
pub mod helpers;
pub mod nav;

use axum::Router;

use crate::state::AppState;

/// Build the application router without outer middleware layers.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(nav::router())
        .merge(health::router())
        .merge(front::router())
        .with_state(state)
}
