//! The navigation panel: a role-filtered tree plus its disclosure state.
//!
//! A panel is what the portal shell mounts. It is built for one role, holds
//! the expand state of its groups, and turns activations into either a toggle
//! or a navigation. Rebuilding a panel starts with every group collapsed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::NavConfig;
use super::entry::{NodeId, Section};
use super::expand::{Disclosure, ExpandState};
use super::filter::{VisibleNav, VisibleNode};
use crate::models::Role;

/// Where the panel is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelVariant {
    /// Always-open desktop sidebar. Never closes itself.
    #[default]
    Permanent,
    /// Modal drawer on small screens. Following a link closes it.
    Temporary,
}

/// Outcome of activating a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A group was toggled into `state`.
    Toggled { id: NodeId, state: Disclosure },
    /// A link was followed.
    Navigate { path: String },
}

type CloseCallback = Box<dyn Fn() + Send + Sync>;

/// A mounted navigation panel.
pub struct NavPanel {
    nav: VisibleNav,
    variant: PanelVariant,
    expand: ExpandState,
    on_close: Option<CloseCallback>,
}

impl NavPanel {
    /// Build a panel showing what `role` may see, all groups collapsed.
    pub fn new(config: &NavConfig, role: Role, variant: PanelVariant) -> Self {
        Self {
            nav: config.filter_for_role(role),
            variant,
            expand: ExpandState::new(),
            on_close: None,
        }
    }

    /// Register the container's close notification.
    ///
    /// Only a [`PanelVariant::Temporary`] panel fires it, once per followed link.
    pub fn with_close_callback(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Start with the given groups expanded. Ids that are not visible groups
    /// for this role are ignored.
    pub fn with_expanded(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        for id in ids {
            if self.nav.find(&id).is_some_and(VisibleNode::is_group) {
                self.expand.expand(id);
            }
        }
        self
    }

    pub fn role(&self) -> Role {
        self.nav.role
    }

    pub fn variant(&self) -> PanelVariant {
        self.variant
    }

    pub fn visible(&self) -> &VisibleNav {
        &self.nav
    }

    pub fn expand_state(&self) -> &ExpandState {
        &self.expand
    }

    /// Toggle a visible group. Returns `None` for links and unknown ids.
    pub fn toggle(&mut self, id: &NodeId) -> Option<Disclosure> {
        let node = self.nav.find(id)?;
        if !node.is_group() {
            return None;
        }
        Some(self.expand.toggle(id))
    }

    /// Handle a click on a node.
    pub fn activate(&mut self, id: &NodeId) -> Option<Activation> {
        let Some(node) = self.nav.find(id) else {
            debug!(node = %id, role = %self.nav.role, "activation of hidden or unknown node");
            return None;
        };

        match &node.path {
            Some(path) => {
                let path = path.clone();
                if self.variant == PanelVariant::Temporary
                    && let Some(close) = &self.on_close
                {
                    close();
                }
                debug!(node = %id, %path, "navigation link followed");
                Some(Activation::Navigate { path })
            }
            None => {
                let state = self.expand.toggle(id);
                debug!(node = %id, ?state, "navigation group toggled");
                Some(Activation::Toggled {
                    id: id.clone(),
                    state,
                })
            }
        }
    }

    /// Render-ready view. `current` marks the link to highlight.
    pub fn view(&self, current: Option<&str>) -> PanelView {
        let build = |section: Section| -> Vec<ItemView> {
            self.nav
                .section(section)
                .iter()
                .map(|node| self.item_view(node, current))
                .collect()
        };

        PanelView {
            title: self.nav.title.clone(),
            role: self.nav.role,
            variant: self.variant,
            expanded: self.expand.to_query_value(),
            main: build(Section::Main),
            settings: build(Section::Settings),
        }
    }

    fn item_view(&self, node: &VisibleNode, current: Option<&str>) -> ItemView {
        let expandable = node.is_group();
        let expanded = expandable && self.expand.is_expanded(&node.id);

        // Collapsed groups do not render their children at all
        let children = if expanded {
            node.child_nodes()
                .iter()
                .map(|child| self.item_view(child, current))
                .collect()
        } else {
            Vec::new()
        };

        let toggle_query = if expandable {
            let mut toggled = self.expand.clone();
            toggled.toggle(&node.id);
            self.query_for(&toggled, current)
        } else {
            String::new()
        };

        ItemView {
            id: node.id.to_string(),
            label: node.label.clone(),
            icon: node.icon.clone(),
            href: node.path.clone(),
            active: match (node.path.as_deref(), current) {
                (Some(path), Some(current)) => link_is_active(path, current),
                _ => false,
            },
            depth: node.id.depth(),
            expandable,
            expanded,
            toggle_query,
            children,
        }
    }

    fn query_for(&self, state: &ExpandState, current: Option<&str>) -> String {
        let mut query = format!("role={}", self.nav.role);
        let expanded = state.to_query_value();
        if !expanded.is_empty() {
            query.push_str("&expanded=");
            query.push_str(&expanded);
        }
        if let Some(current) = current {
            query.push_str("&current=");
            query.push_str(&urlencoding::encode(current));
        }
        query
    }
}

/// Whether a link to `path` is active at `current`: the same location, or
/// any location underneath it. Case and one trailing slash are ignored.
fn link_is_active(path: &str, current: &str) -> bool {
    let current = match current.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => current,
    };

    if current.eq_ignore_ascii_case(path) {
        return true;
    }

    current
        .get(..path.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(path))
        && current[path.len()..].starts_with('/')
}

impl fmt::Debug for NavPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavPanel")
            .field("role", &self.nav.role)
            .field("variant", &self.variant)
            .field("expanded", &self.expand)
            .field("has_close_callback", &self.on_close.is_some())
            .finish()
    }
}

/// What the sidebar template renders.
#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub title: String,
    pub role: Role,
    pub variant: PanelVariant,
    /// Expanded ids in query-string form.
    pub expanded: String,
    pub main: Vec<ItemView>,
    pub settings: Vec<ItemView>,
}

/// One rendered navigation item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub href: Option<String>,
    pub active: bool,
    pub depth: usize,
    pub expandable: bool,
    pub expanded: bool,
    /// Query string that renders this panel with the group toggled.
    pub toggle_query: String,
    pub children: Vec<ItemView>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::menu::RouteTable;

    fn builtin() -> NavConfig {
        NavConfig::builtin(&RouteTable::application()).unwrap()
    }

    fn id(raw: &str) -> NodeId {
        raw.parse().unwrap()
    }

    fn counting_panel(variant: PanelVariant) -> (NavPanel, Arc<AtomicUsize>) {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let panel = NavPanel::new(&builtin(), Role::Admin, variant).with_close_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (panel, closes)
    }

    #[test]
    fn temporary_panel_closes_on_link() {
        let (mut panel, closes) = counting_panel(PanelVariant::Temporary);
        let outcome = panel.activate(&id("main.2.0")).unwrap();
        assert_eq!(
            outcome,
            Activation::Navigate {
                path: "/subjects".to_string()
            }
        );
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn permanent_panel_never_closes() {
        let (mut panel, closes) = counting_panel(PanelVariant::Permanent);
        panel.activate(&id("main.0")).unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn group_activation_toggles_without_closing() {
        let (mut panel, closes) = counting_panel(PanelVariant::Temporary);
        let outcome = panel.activate(&id("main.2")).unwrap();
        assert_eq!(
            outcome,
            Activation::Toggled {
                id: id("main.2"),
                state: Disclosure::Expanded
            }
        );
        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn hidden_nodes_cannot_be_activated() {
        let mut panel = NavPanel::new(&builtin(), Role::Student, PanelVariant::Permanent);
        assert!(panel.activate(&id("main.1")).is_none());
        assert!(panel.toggle(&id("main.0")).is_none());
    }

    #[test]
    fn collapsed_groups_hide_children_in_view() {
        let mut panel = NavPanel::new(&builtin(), Role::Admin, PanelVariant::Permanent);
        let view = panel.view(None);
        assert!(view.main[2].expandable);
        assert!(view.main[2].children.is_empty());
        assert_eq!(view.main[2].toggle_query, "role=admin&expanded=main.2");

        panel.toggle(&id("main.2"));
        let view = panel.view(Some("/subjects"));
        assert_eq!(view.main[2].children.len(), 2);
        assert!(view.main[2].children[0].active);
        assert_eq!(view.main[2].children[0].depth, 1);
        assert!(!view.main[2].active);
        assert_eq!(view.main[2].toggle_query, "role=admin&current=%2Fsubjects");
    }

    #[test]
    fn links_are_active_below_their_path() {
        assert!(link_is_active("/users", "/users"));
        assert!(link_is_active("/users", "/users/"));
        assert!(link_is_active("/users", "/users/edit/42"));
        assert!(link_is_active("/subjects", "/Subjects/add"));
        assert!(!link_is_active("/users", "/usersettings"));
        assert!(!link_is_active("/grades/entry", "/grades"));
    }

    #[test]
    fn nested_location_highlights_parent_link() {
        let panel = NavPanel::new(&builtin(), Role::Admin, PanelVariant::Permanent);
        let view = panel.view(Some("/users/edit/42"));
        assert_eq!(view.main[1].href.as_deref(), Some("/users"));
        assert!(view.main[1].active);
        assert!(!view.main[0].active);
    }

    #[test]
    fn toggle_query_keeps_current_location() {
        let panel = NavPanel::new(&builtin(), Role::Admin, PanelVariant::Permanent);
        let view = panel.view(Some("/fees"));
        assert_eq!(
            view.main[2].toggle_query,
            "role=admin&expanded=main.2&current=%2Ffees"
        );
    }

    #[test]
    fn with_expanded_ignores_links_and_hidden_groups() {
        let panel = NavPanel::new(&builtin(), Role::Admin, PanelVariant::Permanent)
            .with_expanded([id("main.0"), id("main.2"), id("main.9")]);
        assert_eq!(panel.expand_state().to_query_value(), "main.2");
    }

    #[test]
    fn rebuilt_panel_starts_collapsed() {
        let config = builtin();
        let mut panel = NavPanel::new(&config, Role::Admin, PanelVariant::Permanent);
        panel.toggle(&id("main.2"));
        let panel = NavPanel::new(&config, panel.role(), panel.variant());
        assert!(!panel.expand_state().is_expanded(&id("main.2")));
    }
}
