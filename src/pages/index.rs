//! The front page: the large-header layout around the blogroll

use anyhow::Result;

use super::{document, PageContext};
use crate::components::{blogroll, layout, HeaderVariant};
use crate::style::StyleSheet;

/// Render the front page
pub fn render(ctx: &PageContext<'_>) -> Result<String> {
    let mut styles = StyleSheet::new();
    let site = ctx.index.site_metadata();

    let listing = blogroll::render(ctx.renderer, &mut styles, &ctx.index.all_posts())?;
    let body = layout::render(
        ctx.renderer,
        &mut styles,
        ctx.config,
        &site,
        HeaderVariant::Large,
        &listing,
    )?;

    document(ctx, &styles, &site.title, &body)
}
