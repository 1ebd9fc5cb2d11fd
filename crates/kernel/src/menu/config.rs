//! Validated navigation configuration.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use tracing::{debug, info};

use super::definition::{NavDefinition, NavEntryDefinition};
use super::entry::{NavEntry, NavKind, NodeId, Section};
use super::error::NavConfigError;
use super::filter::{VisibleNav, filter_entries};
use super::routes::RouteTable;
use crate::models::Role;

/// The built-in navigation document.
pub const BUILTIN_NAV_YAML: &str = include_str!("default_nav.yml");

/// Immutable, validated navigation tree.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    title: String,
    main: Vec<NavEntry>,
    settings: Vec<NavEntry>,
}

impl NavConfig {
    /// Validate a raw definition against the route table.
    pub fn from_definition(
        definition: NavDefinition,
        routes: &RouteTable,
    ) -> Result<Self, NavConfigError> {
        let main = build_entries(definition.main, Section::Main.as_str(), routes)?;
        let settings = build_entries(definition.settings, Section::Settings.as_str(), routes)?;

        let config = Self {
            title: definition.title,
            main,
            settings,
        };
        debug!(
            main = config.main.len(),
            settings = config.settings.len(),
            entries = config.len(),
            "built navigation config"
        );
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str, routes: &RouteTable) -> Result<Self, NavConfigError> {
        let definition: NavDefinition = serde_yml::from_str(yaml)?;
        Self::from_definition(definition, routes)
    }

    /// Read, parse and validate a YAML file.
    pub fn from_file(path: &Path, routes: &RouteTable) -> Result<Self, NavConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| NavConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml, routes)?;
        info!(path = %path.display(), entries = config.len(), "loaded navigation config");
        Ok(config)
    }

    /// The built-in portal navigation.
    pub fn builtin(routes: &RouteTable) -> Result<Self, NavConfigError> {
        Self::from_yaml_str(BUILTIN_NAV_YAML, routes)
    }

    /// Load `path` if given, otherwise the built-in navigation.
    pub fn load(path: Option<&Path>, routes: &RouteTable) -> Result<Self, NavConfigError> {
        match path {
            Some(path) => Self::from_file(path, routes),
            None => Self::builtin(routes),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self, section: Section) -> &[NavEntry] {
        match section {
            Section::Main => &self.main,
            Section::Settings => &self.settings,
        }
    }

    /// Look up an entry by id, ignoring roles.
    pub fn entry(&self, id: &NodeId) -> Option<&NavEntry> {
        let (first, rest) = id.indices().split_first()?;
        let mut entry = self.section(id.section()).get(*first)?;
        for index in rest {
            entry = entry.children().get(*index)?;
        }
        Some(entry)
    }

    /// Total number of entries across both sections.
    pub fn len(&self) -> usize {
        Section::ALL
            .iter()
            .flat_map(|section| self.section(*section))
            .map(NavEntry::subtree_len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.settings.is_empty()
    }

    /// Every link path, in tree order.
    pub fn leaf_paths(&self) -> Vec<&str> {
        fn collect<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a str>) {
            for entry in entries {
                match &entry.kind {
                    NavKind::Link { path } => out.push(path),
                    NavKind::Group { children } => collect(children, out),
                }
            }
        }

        let mut paths = Vec::new();
        for section in Section::ALL {
            collect(self.section(section), &mut paths);
        }
        paths
    }

    /// The part of the tree `role` may see.
    ///
    /// An entry is kept when its role set is absent or contains `role`; a
    /// rejected entry drops its whole subtree. Groups left without visible
    /// children are kept.
    pub fn filter_for_role(&self, role: Role) -> VisibleNav {
        VisibleNav {
            role,
            title: self.title.clone(),
            main: filter_entries(&self.main, role, &NodeId::root(Section::Main)),
            settings: filter_entries(&self.settings, role, &NodeId::root(Section::Settings)),
        }
    }
}

fn build_entries(
    definitions: Vec<NavEntryDefinition>,
    trail: &str,
    routes: &RouteTable,
) -> Result<Vec<NavEntry>, NavConfigError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(definitions.len());

    for (index, definition) in definitions.into_iter().enumerate() {
        let label = definition.label.trim().to_string();
        if label.is_empty() {
            return Err(NavConfigError::EmptyLabel {
                entry: format!("{trail} > #{index}"),
            });
        }
        // Sibling labels double as render keys.
        if !seen.insert(label.clone()) {
            return Err(NavConfigError::DuplicateLabel {
                parent: trail.to_string(),
                label,
            });
        }

        let entry_trail = format!("{trail} > {label}");
        let kind = match (definition.path, definition.children) {
            (Some(_), Some(_)) => {
                return Err(NavConfigError::PathAndChildren { entry: entry_trail });
            }
            (None, None) => return Err(NavConfigError::MissingTarget { entry: entry_trail }),
            (Some(path), None) => {
                validate_path(&path, &entry_trail, routes)?;
                NavKind::Link { path }
            }
            (None, Some(children)) => NavKind::Group {
                children: build_entries(children, &entry_trail, routes)?,
            },
        };

        entries.push(NavEntry {
            label,
            icon: definition.icon.filter(|icon| !icon.trim().is_empty()),
            allowed_roles: definition
                .roles
                .map(|roles| roles.into_iter().collect::<BTreeSet<_>>()),
            kind,
        });
    }

    Ok(entries)
}

fn validate_path(path: &str, entry: &str, routes: &RouteTable) -> Result<(), NavConfigError> {
    if !path.starts_with('/') {
        return Err(NavConfigError::RelativePath {
            entry: entry.to_string(),
            path: path.to_string(),
        });
    }
    if !routes.contains_path(path) {
        return Err(NavConfigError::UnknownRoute {
            entry: entry.to_string(),
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<NavConfig, NavConfigError> {
        NavConfig::from_yaml_str(yaml, &RouteTable::application())
    }

    #[test]
    fn builtin_config_is_valid() {
        let config = NavConfig::builtin(&RouteTable::application()).unwrap();
        assert_eq!(config.title(), "SMS Portal");
        assert_eq!(config.section(Section::Main).len(), 6);
        assert_eq!(config.section(Section::Settings).len(), 1);
        assert_eq!(config.len(), 10);
    }

    #[test]
    fn builtin_leaves_match_routes() {
        let routes = RouteTable::application();
        let config = NavConfig::builtin(&routes).unwrap();
        for path in config.leaf_paths() {
            assert!(routes.contains_path(path), "{path} has no route");
        }
    }

    #[test]
    fn entry_lookup_by_id() {
        let config = NavConfig::builtin(&RouteTable::application()).unwrap();
        let id: NodeId = "main.2.1".parse().unwrap();
        assert_eq!(config.entry(&id).unwrap().label, "Grade Entry");
        assert!(config.entry(&"main.9".parse().unwrap()).is_none());
        assert!(config.entry(&NodeId::root(Section::Main)).is_none());
    }

    #[test]
    fn rejects_path_and_children() {
        let err = parse(
            r#"
main:
  - label: Academic
    path: /subjects
    children:
      - label: Subjects
        path: /subjects
"#,
        )
        .unwrap_err();
        assert!(matches!(err, NavConfigError::PathAndChildren { ref entry } if entry == "main > Academic"));
    }

    #[test]
    fn rejects_missing_target() {
        let err = parse(
            r#"
settings:
  - label: Orphan
"#,
        )
        .unwrap_err();
        assert!(matches!(err, NavConfigError::MissingTarget { ref entry } if entry == "settings > Orphan"));
    }

    #[test]
    fn rejects_nested_unknown_route() {
        let err = parse(
            r#"
main:
  - label: Academic
    children:
      - label: Attendance
        path: /attendance
"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "navigation entry 'main > Academic > Attendance' links to unknown route '/attendance'"
        );
    }

    #[test]
    fn rejects_relative_path() {
        let err = parse(
            r#"
main:
  - label: Dashboard
    path: dashboard
"#,
        )
        .unwrap_err();
        assert!(matches!(err, NavConfigError::RelativePath { .. }));
    }

    #[test]
    fn rejects_duplicate_siblings_only() {
        let err = parse(
            r#"
main:
  - label: Dashboard
    path: /dashboard
  - label: Dashboard
    path: /timetable
"#,
        )
        .unwrap_err();
        assert!(matches!(err, NavConfigError::DuplicateLabel { .. }));

        // Same label at different levels is fine
        parse(
            r#"
main:
  - label: Subjects
    children:
      - label: Subjects
        path: /subjects
"#,
        )
        .unwrap();
    }

    #[test]
    fn rejects_empty_label() {
        let err = parse(
            r#"
main:
  - label: "  "
    path: /dashboard
"#,
        )
        .unwrap_err();
        assert!(matches!(err, NavConfigError::EmptyLabel { .. }));
    }

    #[test]
    fn empty_group_is_allowed() {
        let config = parse(
            r#"
main:
  - label: Later
    children: []
"#,
        )
        .unwrap();
        assert!(config.section(Section::Main)[0].is_group());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = NavConfig::from_file(
            Path::new("/nonexistent/nav.yml"),
            &RouteTable::application(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/nav.yml"));
    }
}
