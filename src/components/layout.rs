//! Page layout: a header block followed by the page content

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use super::{ContactLink, CONTACT_LINKS};
use crate::config::SiteConfig;
use crate::helpers::url_for;
use crate::query::SiteMetadata;
use crate::style::StyleSheet;
use crate::templates::TemplateRenderer;

const CONTAINER_WIDTH: &str = "1000px";
const HEADER_COLOR: &str = "#ffffff7e";

/// Which header block the layout renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Title, byline and contact links over the full header image
    Large,
    /// Title linking home and contact links over a cropped strip of the image
    Small,
}

/// Render `children` inside the site layout
pub fn render(
    renderer: &TemplateRenderer,
    styles: &mut StyleSheet,
    config: &SiteConfig,
    site: &SiteMetadata,
    variant: HeaderVariant,
    children: &str,
) -> Result<String> {
    let header = render_header(renderer, styles, config, site, variant)?;

    let mut context = Context::new();
    context.insert(
        "container_class",
        &styles.scoped(&format!("max-width: {}; margin: auto;", CONTAINER_WIDTH)),
    );
    context.insert("header", &header);
    context.insert("children", children);

    renderer.render("layout.html", &context)
}

fn render_header(
    renderer: &TemplateRenderer,
    styles: &mut StyleSheet,
    config: &SiteConfig,
    site: &SiteMetadata,
    variant: HeaderVariant,
) -> Result<String> {
    let background = format!(
        "background-image: url({});",
        url_for(config, &config.header_image)
    );

    let mut context = Context::new();
    context.insert("site", site);
    context.insert("contact_links", &contact_links(config));
    context.insert(
        "contact_list_class",
        &styles.scoped("list-style-type: none;"),
    );
    context.insert(
        "contact_item_class",
        &styles.scoped("float: right; margin-right: 10px;"),
    );

    let template = match variant {
        HeaderVariant::Large => {
            context.insert(
                "outer_class",
                &styles.scoped(&format!("margin: 3rem auto; height: 312px; {}", background)),
            );
            context.insert(
                "inner_class",
                &styles.scoped(&format!(
                    "width: 400px; display: inline-block; vertical-align: middle; \
                     margin-left: 100px; margin-top: 50px; margin-bottom: auto; \
                     background-color: {}; padding: 20px;",
                    HEADER_COLOR
                )),
            );
            "partials/header_large.html"
        }
        HeaderVariant::Small => {
            context.insert(
                "outer_class",
                &styles.scoped(&format!(
                    "margin: 3rem auto; height: 60px; {} background-position: center; padding: 10px;",
                    background
                )),
            );
            context.insert(
                "inner_class",
                &styles.scoped("display: inline-block; width: 100%; padding: 5px;"),
            );
            context.insert(
                "title_class",
                &styles.scoped("margin-top: 0; float: left;"),
            );
            context.insert("home_url", &url_for(config, "/"));
            "partials/header_small.html"
        }
    };

    renderer.render(template, &context)
}

#[derive(Serialize)]
struct ResolvedContactLink {
    name: &'static str,
    href: &'static str,
    icon: String,
}

fn contact_links(config: &SiteConfig) -> Vec<ResolvedContactLink> {
    CONTACT_LINKS
        .iter()
        .map(|link: &ContactLink| ResolvedContactLink {
            name: link.name,
            href: link.href,
            icon: url_for(config, link.icon),
        })
        .collect()
}
