//! Shared route helpers for navigation rendering.

use serde::Deserialize;

use crate::error::AppResult;
use crate::menu::{NavPanel, NodeId, PanelVariant};
use crate::models::Role;
use crate::state::AppState;

/// Query parameters understood by every navigation-rendering route.
#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    /// Role to render for; the configured default when absent.
    pub role: Option<String>,
    /// Comma-separated ids of expanded groups.
    pub expanded: Option<String>,
    /// Current location, used to highlight the active link.
    pub current: Option<String>,
    /// Where the sidebar is mounted; permanent when absent.
    pub variant: Option<PanelVariant>,
}

/// Resolve the role a request renders for.
///
/// The caller names the role; an empty or missing value falls back to the
/// configured default, an unknown one is a bad request.
pub fn resolve_role(state: &AppState, raw: Option<&str>) -> AppResult<Role> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(state.default_role()),
    }
}

/// Parse a comma-separated list of node ids.
pub fn parse_expanded(raw: Option<&str>) -> AppResult<Vec<NodeId>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<NodeId>)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ids)
}

/// Mount a fresh sidebar panel for a request.
pub fn build_panel(state: &AppState, query: &NavQuery) -> AppResult<NavPanel> {
    let role = resolve_role(state, query.role.as_deref())?;
    let expanded = parse_expanded(query.expanded.as_deref())?;

    let variant = query.variant.unwrap_or_default();

    Ok(NavPanel::new(state.nav(), role, variant).with_expanded(expanded))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn parse_expanded_skips_blanks() {
        let ids = parse_expanded(Some("main.2, ,settings.0,")).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1].to_string(), "settings.0");
        assert!(parse_expanded(None).unwrap().is_empty());
    }

    #[test]
    fn parse_expanded_rejects_bad_ids() {
        let err = parse_expanded(Some("main.2,sidebar")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
