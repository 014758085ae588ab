//! Built-in theme templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Components hand each other pre-rendered HTML; text is escaped
        // explicitly with the `html_escape` filter
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("document.html", include_str!("theme/document.html")),
            ("layout.html", include_str!("theme/layout.html")),
            ("blogroll.html", include_str!("theme/blogroll.html")),
            ("post.html", include_str!("theme/post.html")),
            // Partials
            (
                "partials/header_large.html",
                include_str!("theme/partials/header_large.html"),
            ),
            (
                "partials/header_small.html",
                include_str!("theme/partials/header_small.html"),
            ),
            (
                "partials/contact_links.html",
                include_str!("theme/partials/contact_links.html"),
            ),
        ])?;

        tera.register_filter("html_escape", html_escape_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape HTML special characters, leaving `/` untouched
fn html_escape_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("html_escape", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}
