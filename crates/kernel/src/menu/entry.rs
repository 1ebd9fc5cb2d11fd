//! Validated navigation entries and node identity.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::models::Role;

/// The two navigation lists rendered by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Main,
    Settings,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Main, Section::Settings];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Main => "main",
            Section::Settings => "settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an entry does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavKind {
    /// A link to a route path.
    Link { path: String },
    /// A collapsible group of child entries.
    Group { children: Vec<NavEntry> },
}

/// A validated navigation entry.
///
/// Holds exactly one of a path or a child list; the raw definition's
/// both-or-neither cases cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub icon: Option<String>,
    /// `None` means visible to every role.
    pub allowed_roles: Option<BTreeSet<Role>>,
    pub kind: NavKind,
}

impl NavEntry {
    /// Whether `role` passes this entry's own role check.
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.allowed_roles
            .as_ref()
            .is_none_or(|roles| roles.contains(&role))
    }

    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            NavKind::Link { path } => Some(path),
            NavKind::Group { .. } => None,
        }
    }

    /// Child entries; empty for links.
    pub fn children(&self) -> &[NavEntry] {
        match &self.kind {
            NavKind::Link { .. } => &[],
            NavKind::Group { children } => children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NavKind::Group { .. })
    }

    /// Number of entries in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(NavEntry::subtree_len)
            .sum::<usize>()
    }
}

/// Identity of a node: its section plus the index path from the section root
/// in the unfiltered config. Stable across roles.
///
/// Text form is `section.i.j`, e.g. `main.2.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    section: Section,
    indices: Vec<usize>,
}

/// Returned when a node id string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid navigation node id: {0}")]
pub struct InvalidNodeId(pub String);

impl NodeId {
    /// The root of a section (not itself an entry).
    pub fn root(section: Section) -> Self {
        Self {
            section,
            indices: Vec::new(),
        }
    }

    pub fn new(section: Section, indices: Vec<usize>) -> Self {
        Self { section, indices }
    }

    /// Id of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self {
            section: self.section,
            indices,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_root(&self) -> bool {
        self.indices.is_empty()
    }

    /// Nesting depth; top-level entries are depth 0.
    pub fn depth(&self) -> usize {
        self.indices.len().saturating_sub(1)
    }

    /// Whether `other` lies inside this node's subtree (or is this node).
    pub fn contains(&self, other: &NodeId) -> bool {
        self.section == other.section && other.indices.starts_with(&self.indices)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section.as_str())?;
        for index in &self.indices {
            write!(f, ".{index}")?;
        }
        Ok(())
    }
}

impl FromStr for NodeId {
    type Err = InvalidNodeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidNodeId(s.to_string());
        let mut parts = s.trim().split('.');

        let section = match parts.next() {
            Some("main") => Section::Main,
            Some("settings") => Section::Settings,
            _ => return Err(invalid()),
        };

        let indices = parts
            .map(|part| part.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { section, indices })
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
