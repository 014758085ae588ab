//! The blogroll: a count heading followed by one summary card per post

use anyhow::Result;
use tera::Context;

use crate::query::PostConnection;
use crate::style::StyleSheet;
use crate::templates::TemplateRenderer;

/// Render every post of `connection`, in the order given
pub fn render(
    renderer: &TemplateRenderer,
    styles: &mut StyleSheet,
    connection: &PostConnection,
) -> Result<String> {
    let mut context = Context::new();
    context.insert("connection", connection);
    context.insert(
        "container_class",
        &styles.scoped("max-width: 800px; margin: auto; padding: 10px;"),
    );
    context.insert(
        "list_class",
        &styles.scoped("list-style-type: none; padding: 0; margin: 0;"),
    );
    context.insert(
        "item_class",
        &styles.scoped(
            "width: 100%; display: inline-block; padding: 20px 20px 0px 0px; \
             background-color: #ffffff;",
        ),
    );
    context.insert(
        "title_class",
        &styles.scoped("margin-bottom: 0.36rem;"),
    );
    context.insert("date_class", &styles.scoped("color: #bbb;"));
    context.insert("thumbnail_class", &styles.scoped("float: right;"));

    renderer.render("blogroll.html", &context)
}
