//! Role filtering of the navigation tree.

use serde::{Deserialize, Serialize};

use super::entry::{NavEntry, NavKind, NodeId, Section};
use crate::models::Role;

/// An entry that survived role filtering.
///
/// Serializes with either `path` or `children`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleNode {
    pub id: NodeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<VisibleNode>>,
}

impl VisibleNode {
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// Visible children; empty for links.
    pub fn child_nodes(&self) -> &[VisibleNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// The navigation as one role sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleNav {
    pub role: Role,
    pub title: String,
    pub main: Vec<VisibleNode>,
    pub settings: Vec<VisibleNode>,
}

impl VisibleNav {
    pub fn section(&self, section: Section) -> &[VisibleNode] {
        match section {
            Section::Main => &self.main,
            Section::Settings => &self.settings,
        }
    }

    /// Find a visible node by id.
    pub fn find(&self, id: &NodeId) -> Option<&VisibleNode> {
        let mut nodes = self.section(id.section());
        loop {
            let node = nodes.iter().find(|node| node.id.contains(id))?;
            if node.id == *id {
                return Some(node);
            }
            nodes = node.child_nodes();
        }
    }

    /// Whether any node with this label is visible.
    pub fn contains_label(&self, label: &str) -> bool {
        fn walk(nodes: &[VisibleNode], label: &str) -> bool {
            nodes
                .iter()
                .any(|node| node.label == label || walk(node.child_nodes(), label))
        }
        walk(&self.main, label) || walk(&self.settings, label)
    }

    /// Total number of visible nodes.
    pub fn len(&self) -> usize {
        fn count(nodes: &[VisibleNode]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + count(node.child_nodes()))
                .sum()
        }
        count(&self.main) + count(&self.settings)
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.settings.is_empty()
    }

    /// Plain-text outline, two spaces of indent per level.
    pub fn outline(&self) -> String {
        fn write_nodes(out: &mut String, nodes: &[VisibleNode], depth: usize) {
            for node in nodes {
                let indent = "  ".repeat(depth + 1);
                match &node.path {
                    Some(path) => out.push_str(&format!("{indent}{} -> {path}\n", node.label)),
                    None => out.push_str(&format!("{indent}{}\n", node.label)),
                }
                write_nodes(out, node.child_nodes(), depth + 1);
            }
        }

        let mut out = format!("{} ({})\n", self.title, self.role);
        for section in Section::ALL {
            out.push_str(section.as_str());
            out.push_str(":\n");
            write_nodes(&mut out, self.section(section), 0);
        }
        out
    }
}

/// Depth-first filter of `entries` for `role`; `parent` is the id of the
/// node that owns `entries`.
pub(crate) fn filter_entries(entries: &[NavEntry], role: Role, parent: &NodeId) -> Vec<VisibleNode> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_visible_to(role))
        .map(|(index, entry)| {
            let id = parent.child(index);
            let (path, children) = match &entry.kind {
                NavKind::Link { path } => (Some(path.clone()), None),
                NavKind::Group { children } => (None, Some(filter_entries(children, role, &id))),
            };
            VisibleNode {
                id,
                label: entry.label.clone(),
                icon: entry.icon.clone(),
                path,
                children,
            }
        })
        .collect()
}
