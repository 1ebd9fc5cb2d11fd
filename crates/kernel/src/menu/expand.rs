//! Expand/collapse state for navigation groups.
//!
//! Kept outside the navigation tree: the tree is shared and immutable, while
//! this state belongs to one mounted panel and is dropped with it.

use std::collections::BTreeSet;

use serde::Serialize;

use super::entry::NodeId;

/// Disclosure state of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    /// The state after one toggle.
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Disclosure::Expanded
    }
}

/// Per-node disclosure states. Nodes not recorded are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: BTreeSet<NodeId>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &NodeId) -> Disclosure {
        if self.expanded.contains(id) {
            Disclosure::Expanded
        } else {
            Disclosure::Collapsed
        }
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    /// Flip one node and return its new state.
    pub fn toggle(&mut self, id: &NodeId) -> Disclosure {
        if self.expanded.remove(id) {
            Disclosure::Collapsed
        } else {
            self.expanded.insert(id.clone());
            Disclosure::Expanded
        }
    }

    pub fn expand(&mut self, id: NodeId) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: &NodeId) {
        self.expanded.remove(id);
    }

    /// Collapse everything.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Expanded ids in order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.expanded.iter()
    }

    /// Comma-separated expanded ids, the form used in query strings.
    pub fn to_query_value(&self) -> String {
        self.expanded
            .iter()
            .map(NodeId::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<NodeId> for ExpandState {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}
