//! Raw navigation definitions as written in YAML.
//!
//! These mirror the file format one-to-one and are not yet validated: an entry
//! may carry both a path and children here. [`NavConfig`](super::NavConfig)
//! turns them into typed entries or rejects them.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Portal title used when a config does not set one.
pub const DEFAULT_TITLE: &str = "SMS Portal";

/// A navigation document: a title and two sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavDefinition {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub main: Vec<NavEntryDefinition>,
    #[serde(default)]
    pub settings: Vec<NavEntryDefinition>,
}

/// One entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntryDefinition {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavEntryDefinition>>,
    /// Roles allowed to see the entry (absent = everyone).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
