//! Content loader - loads posts from the content directory

use anyhow::Result;
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::markdown::prune;
use super::{FrontMatter, MarkdownRenderer, Post};
use crate::helpers::asset_url;
use crate::Blog;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let renderer =
            MarkdownRenderer::with_options(&blog.config.highlight_theme, blog.config.line_numbers);
        Self { blog, renderer }
    }

    /// Load every post, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen_slugs = HashSet::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let post = match self.load_post(path) {
                Ok(post) => post,
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                    continue;
                }
            };

            if post.draft && !self.blog.config.render_drafts {
                tracing::debug!("Skipping draft {:?}", path);
                continue;
            }

            if post.slug == "/" {
                tracing::warn!("Skipping {:?}: the site root is reserved for the front page", path);
                continue;
            }

            if !seen_slugs.insert(post.slug.clone()) {
                tracing::warn!(
                    "Skipping {:?}: slug {} is already used by another post",
                    path,
                    post.slug
                );
                continue;
            }

            posts.push(post);
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let slug = match fm.slug.as_deref() {
            Some(custom) => normalize_slug(custom),
            None => slug_from_source(&source),
        };

        let excerpt_source = fm
            .excerpt
            .as_deref()
            .or_else(|| MarkdownRenderer::split_excerpt(body))
            .unwrap_or(body);
        let excerpt = prune(
            &MarkdownRenderer::plain_text(excerpt_source),
            self.blog.config.excerpt_length,
        );

        let mut post = Post::new(title, date, source);
        let featured_image = fm
            .featured_image
            .as_deref()
            .map(|image| asset_url(&self.blog.config, post.source_dir(), image));
        post.featured_image = featured_image;
        post.content = self.renderer.render(&body.replacen("<!-- more -->", "", 1))?;
        post.excerpt = excerpt;
        post.slug = slug;
        post.draft = fm.draft;

        Ok(post)
    }
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Derive a post address from its path relative to the content directory.
/// `posts/hello.md` becomes `/posts/hello/`; `posts/hello/index.md` becomes
/// `/posts/hello/`.
pub fn slug_from_source(source: &str) -> String {
    let without_ext = source
        .strip_suffix(".markdown")
        .or_else(|| source.strip_suffix(".md"))
        .unwrap_or(source);

    let path = match without_ext.strip_suffix("index") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => dir,
        _ => without_ext,
    };

    normalize_slug(path)
}

/// Ensure a slug starts and ends with a single `/`
fn normalize_slug(slug: &str) -> String {
    let trimmed = slug.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
