//! Theme engine and template rendering.
//!
//! Provides Tera-based rendering of the navigation sidebar and the portal
//! shell pages from templates embedded in the binary.

mod engine;

pub use engine::{PageContent, ThemeEngine};
