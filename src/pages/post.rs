//! A single post: the small-header layout around the rendered article

use anyhow::Result;
use tera::Context;

use super::{document, PageContext};
use crate::components::{layout, HeaderVariant};
use crate::content::Post;
use crate::helpers::date_xml;
use crate::style::StyleSheet;

/// Render the page of one post
pub fn render(ctx: &PageContext<'_>, post: &Post) -> Result<String> {
    let mut styles = StyleSheet::new();
    let site = ctx.index.site_metadata();

    let mut context = Context::new();
    context.insert("title", &post.title);
    context.insert("date", &ctx.index.format_date(post));
    context.insert("datetime", &date_xml(&post.date));
    context.insert("content", &post.content);
    context.insert(
        "article_class",
        &styles.scoped("max-width: 800px; margin: auto; padding: 10px;"),
    );
    context.insert("date_class", &styles.scoped("color: #bbb;"));
    let article = ctx.renderer.render("post.html", &context)?;

    let body = layout::render(
        ctx.renderer,
        &mut styles,
        ctx.config,
        &site,
        HeaderVariant::Small,
        &article,
    )?;

    document(ctx, &styles, &format!("{} | {}", post.title, site.title), &body)
}
