//! Navigation system for the portal shell.
//!
//! The navigation is a static, role-tagged tree:
//! - Loaded once (built-in YAML or a file) and validated against the route table
//! - Filtered per role into a [`VisibleNav`]
//! - Mounted as a [`NavPanel`] that tracks which groups are expanded

mod config;
mod definition;
mod entry;
mod error;
mod expand;
mod filter;
mod panel;
mod routes;

pub use config::{BUILTIN_NAV_YAML, NavConfig};
pub use definition::{DEFAULT_TITLE, NavDefinition, NavEntryDefinition};
pub use entry::{InvalidNodeId, NavEntry, NavKind, NodeId, Section};
pub use error::NavConfigError;
pub use expand::{Disclosure, ExpandState};
pub use filter::{VisibleNav, VisibleNode};
pub use panel::{Activation, ItemView, NavPanel, PanelVariant, PanelView};
pub use routes::{RouteDefinition, RouteLayout, RouteMatch, RouteTable};
