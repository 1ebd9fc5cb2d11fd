//! Theme engine with embedded Tera templates.

use anyhow::{Context, Result};
use tera::Tera;
use tracing::debug;

use crate::menu::PanelView;
use crate::models::Role;

const MACROS_TEMPLATE: &str = include_str!("../../templates/macros.html");
const SIDEBAR_TEMPLATE: &str = include_str!("../../templates/sidebar.html");
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Content of one portal shell page.
#[derive(Debug, Clone)]
pub struct PageContent<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub role: Role,
}

/// Theme engine for rendering the sidebar and shell pages.
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine with the built-in templates.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("macros.html", MACROS_TEMPLATE),
            ("sidebar.html", SIDEBAR_TEMPLATE),
            ("page.html", PAGE_TEMPLATE),
        ])
        .context("failed to initialize Tera templates")?;

        // Register custom filters
        Self::register_filters(&mut tera);

        debug!(
            count = tera.get_template_names().count(),
            "loaded templates"
        );

        Ok(Self { tera })
    }

    /// Register custom Tera filters.
    fn register_filters(tera: &mut Tera) {
        // Attribute escaping that leaves '/' intact so route paths stay readable
        tera.register_filter(
            "escape_attr",
            |value: &tera::Value, _args: &std::collections::HashMap<String, tera::Value>| {
                let text = tera::try_get_value!("escape_attr", "value", String, value);
                Ok(tera::Value::String(escape_attr(&text)))
            },
        );
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Render the navigation sidebar fragment.
    pub fn render_sidebar(&self, panel: &PanelView) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("panel", panel);

        self.tera
            .render("sidebar.html", &context)
            .context("failed to render sidebar template")
    }

    /// Render a full shell page around a rendered sidebar.
    pub fn render_page(&self, panel: &PanelView, content: &PageContent<'_>) -> Result<String> {
        let sidebar = self.render_sidebar(panel)?;

        let mut context = tera::Context::new();
        context.insert("portal_title", &panel.title);
        context.insert("title", content.title);
        context.insert("body", content.body);
        context.insert("role", &content.role);
        context.insert("sidebar", &sidebar);

        self.tera
            .render("page.html", &context)
            .context("failed to render page template")
    }
}

/// Escape a value for use inside a double-quoted HTML attribute.
fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}
