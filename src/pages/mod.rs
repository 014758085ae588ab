//! Page entry points: each one composes components into a full HTML document

pub mod index;
pub mod post;

use anyhow::Result;
use tera::Context;

use crate::config::SiteConfig;
use crate::helpers::meta_generator;
use crate::query::ContentIndex;
use crate::style::StyleSheet;
use crate::templates::TemplateRenderer;

/// Everything a page needs to render
pub struct PageContext<'a> {
    pub renderer: &'a TemplateRenderer,
    pub config: &'a SiteConfig,
    pub index: &'a ContentIndex,
}

/// Wrap a rendered body into a standalone document, inlining the page styles
fn document(ctx: &PageContext<'_>, styles: &StyleSheet, title: &str, body: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("lang", "en");
    context.insert("generator", &meta_generator());
    context.insert("title", title);
    context.insert("styles", &styles.to_css());
    context.insert("body", body);

    ctx.renderer.render("document.html", &context)
}
