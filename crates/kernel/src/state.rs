//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::menu::{NavConfig, RouteTable};
use crate::models::Role;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Everything inside is
/// immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    /// Validated navigation tree.
    nav: NavConfig,

    /// Application route table.
    routes: RouteTable,

    /// Theme engine for template rendering.
    theme: ThemeEngine,

    /// Role for requests that do not name one.
    default_role: Role,
}

impl AppState {
    /// Build state from configuration, loading and validating the navigation.
    pub fn new(config: &Config) -> Result<Self> {
        let routes = RouteTable::application();

        let nav = NavConfig::load(config.nav_config_path.as_deref(), &routes)
            .context("failed to load navigation config")?;
        let source = config
            .nav_config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string());
        info!(entries = nav.len(), %source, "Navigation loaded");

        let theme = ThemeEngine::new().context("failed to initialize theme engine")?;

        Ok(Self::from_parts(nav, routes, theme, config.default_role))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        nav: NavConfig,
        routes: RouteTable,
        theme: ThemeEngine,
        default_role: Role,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                nav,
                routes,
                theme,
                default_role,
            }),
        }
    }

    pub fn nav(&self) -> &NavConfig {
        &self.inner.nav
    }

    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    pub fn default_role(&self) -> Role {
        self.inner.default_role
    }
}
