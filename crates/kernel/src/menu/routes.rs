//! Application route table.
//!
//! Navigation leaves point at these routes; a navigation config that links
//! anywhere else is rejected when it is built.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

/// Which shell a route renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteLayout {
    /// Login, registration and password recovery screens (no sidebar).
    Auth,
    /// Everything behind the navigation shell.
    Main,
}

/// A single route definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDefinition {
    /// URL path pattern (e.g., "/users", "/users/edit/:userId")
    pub pattern: String,
    /// Human-readable page title
    pub title: String,
    pub layout: RouteLayout,
}

impl RouteDefinition {
    pub fn new(pattern: &str, title: &str, layout: RouteLayout) -> Self {
        Self {
            pattern: pattern.to_string(),
            title: title.to_string(),
            layout,
        }
    }
}

/// Result of matching a path against the route table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route.
    pub route: RouteDefinition,
    /// Path parameters extracted (e.g., {"userId": "42"})
    pub params: HashMap<String, String>,
}

/// Ordered table of route patterns.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Sorted so that more specific patterns are tried first.
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Build a table from route definitions.
    pub fn new(mut routes: Vec<RouteDefinition>) -> Self {
        // Fewer params = more specific = first
        routes.sort_by_key(|route| {
            let param_count = route.pattern.matches(':').count();
            let segment_count = route.pattern.matches('/').count();
            (param_count, -(segment_count as i32))
        });

        debug!(routes = routes.len(), "built route table");
        Self { routes }
    }

    /// The portal's route table.
    pub fn application() -> Self {
        use RouteLayout::{Auth, Main};

        Self::new(vec![
            RouteDefinition::new("/login", "Login", Auth),
            RouteDefinition::new("/register", "Register", Auth),
            RouteDefinition::new("/forgot-password", "Forgot Password", Auth),
            RouteDefinition::new("/dashboard", "Dashboard", Main),
            RouteDefinition::new("/users", "User Management", Main),
            RouteDefinition::new("/users/add", "Add User", Main),
            RouteDefinition::new("/users/edit/:userId", "Edit User", Main),
            RouteDefinition::new("/users/view/:userId", "View User", Main),
            RouteDefinition::new("/subjects", "Subjects", Main),
            RouteDefinition::new("/subjects/add", "Add Subject", Main),
            RouteDefinition::new("/subjects/edit/:subjectId", "Edit Subject", Main),
            RouteDefinition::new("/grades/entry", "Grade Entry", Main),
            RouteDefinition::new("/my-grades", "My Grades", Main),
            RouteDefinition::new("/students", "Students", Main),
            RouteDefinition::new("/timetable", "Timetable", Main),
            RouteDefinition::new("/fees", "Fees Management", Main),
            RouteDefinition::new("/system-settings", "System Settings", Main),
        ])
    }

    /// Match a request path against the table.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            match_pattern(&route.pattern, path).map(|params| RouteMatch {
                route: route.clone(),
                params,
            })
        })
    }

    /// Whether some route accepts this path.
    pub fn contains_path(&self, path: &str) -> bool {
        self.routes
            .iter()
            .any(|route| match_pattern(&route.pattern, path).is_some())
    }

    /// All routes in match order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Match a route pattern against a path, extracting parameters.
///
/// Pattern: "/users/edit/:userId"
/// Path: "/users/edit/42"
/// Result: Some({"userId": "42"})
///
/// Literal segments compare case-insensitively and one trailing slash on the
/// path is ignored.
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };

    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (pat, actual) in pattern_parts.iter().zip(path_parts.iter()) {
        if let Some(param_name) = pat.strip_prefix(':') {
            // Parameters never match an empty segment
            if actual.is_empty() {
                return None;
            }
            params.insert(param_name.to_string(), actual.to_string());
        } else if !pat.eq_ignore_ascii_case(actual) {
            return None;
        }
    }

    Some(params)
}
