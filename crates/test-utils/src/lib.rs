//! STMS test utilities.
//!
//! Builders for navigation fixtures. Documents are emitted as JSON text,
//! which the YAML loader accepts unchanged.

use serde_json::{Map, Value as JsonValue, json};

/// Create a link entry.
pub fn link(label: &str, path: &str) -> TestNavEntry {
    TestNavEntry {
        label: label.to_string(),
        icon: None,
        path: Some(path.to_string()),
        children: None,
        roles: None,
    }
}

/// Create a group entry.
pub fn group(label: &str, children: Vec<TestNavEntry>) -> TestNavEntry {
    TestNavEntry {
        label: label.to_string(),
        icon: None,
        path: None,
        children: Some(children),
        roles: None,
    }
}

/// A navigation entry builder for creating test fixtures.
///
/// Unlike the validated model it can hold both a path and children (or
/// neither), so invalid documents can be built too.
#[derive(Debug, Clone)]
pub struct TestNavEntry {
    pub label: String,
    pub icon: Option<String>,
    pub path: Option<String>,
    pub children: Option<Vec<TestNavEntry>>,
    pub roles: Option<Vec<String>>,
}

impl TestNavEntry {
    /// Restrict to the given role names.
    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = Some(roles.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Set a path (also on groups, for invalid fixtures).
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Remove the path, leaving a link with no target.
    pub fn without_path(mut self) -> Self {
        self.path = None;
        self
    }

    /// Set children (also on links, for invalid fixtures).
    pub fn with_children(mut self, children: Vec<TestNavEntry>) -> Self {
        self.children = Some(children);
        self
    }

    /// JSON form of the entry.
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::new();
        obj.insert("label".to_string(), json!(self.label));
        if let Some(icon) = &self.icon {
            obj.insert("icon".to_string(), json!(icon));
        }
        if let Some(path) = &self.path {
            obj.insert("path".to_string(), json!(path));
        }
        if let Some(children) = &self.children {
            let children: Vec<JsonValue> = children.iter().map(TestNavEntry::to_json).collect();
            obj.insert("children".to_string(), JsonValue::Array(children));
        }
        if let Some(roles) = &self.roles {
            obj.insert("roles".to_string(), json!(roles));
        }
        JsonValue::Object(obj)
    }
}

/// Build a navigation document from main and settings entries.
pub fn nav_document(main: &[TestNavEntry], settings: &[TestNavEntry]) -> String {
    json!({
        "title": "Test Portal",
        "main": main.iter().map(TestNavEntry::to_json).collect::<Vec<_>>(),
        "settings": settings.iter().map(TestNavEntry::to_json).collect::<Vec<_>>(),
    })
    .to_string()
}

/// The "Academic" group used in several scenarios: one admin-only child and
/// one child for students and parents.
pub fn academic_group() -> TestNavEntry {
    group(
        "Academic",
        vec![
            link("Subjects", "/subjects").with_roles(&["admin"]),
            link("My Grades", "/my-grades").with_roles(&["student", "parent"]),
        ],
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn link_json_has_no_children() {
        let json = link("Dashboard", "/dashboard").to_json();
        assert_eq!(json["path"], "/dashboard");
        assert!(json.get("children").is_none());
        assert!(json.get("roles").is_none());
    }

    #[test]
    fn document_round_trips_as_json() {
        let doc = nav_document(&[academic_group()], &[]);
        let value: JsonValue = serde_json::from_str(&doc).unwrap();
        assert_eq!(value["main"][0]["children"][1]["roles"][0], "student");
        assert_eq!(value["settings"], json!([]));
    }
}
