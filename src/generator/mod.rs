//! Generator module - writes the rendered site into the public directory

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::content::loader::is_markdown_file;
use crate::pages::{self, PageContext};
use crate::query::ContentIndex;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Static site generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

/// What a build produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, index: &ContentIndex) -> Result<BuildSummary> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let mut summary = BuildSummary::default();

        // Static files first so content assets with the same path win
        summary.assets += copy_tree(&self.blog.static_dir, &self.blog.public_dir, |_| true)?;
        summary.assets += copy_tree(&self.blog.content_dir, &self.blog.public_dir, |path| {
            !is_markdown_file(path)
        })?;

        let ctx = PageContext {
            renderer: &self.renderer,
            config: &self.blog.config,
            index,
        };

        let html = pages::index::render(&ctx)?;
        self.write_page("/", &html)?;
        summary.pages += 1;

        for post in index.posts() {
            let html = pages::post::render(&ctx, post)?;
            self.write_page(&post.slug, &html)
                .with_context(|| format!("Failed to write post {}", post.source))?;
            summary.pages += 1;
        }

        Ok(summary)
    }

    /// Output file for a site path, e.g. `/posts/a/` -> `public/posts/a/index.html`
    pub fn output_path(&self, site_path: &str) -> PathBuf {
        let clean_path = site_path.trim_matches('/');
        if clean_path.is_empty() {
            self.blog.public_dir.join("index.html")
        } else {
            self.blog.public_dir.join(clean_path).join("index.html")
        }
    }

    fn write_page(&self, site_path: &str, html: &str) -> Result<()> {
        let output_path = self.output_path(site_path);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}

/// Copy every file under `from` accepted by `keep` into `to`, preserving
/// relative paths. Hidden files and directories are skipped.
fn copy_tree(from: &Path, to: &Path, keep: impl Fn(&Path) -> bool) -> Result<usize> {
    if !from.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(from)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !keep(path) {
            continue;
        }

        let relative = path.strip_prefix(from)?;
        let dest = to.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)?;
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let blog = Blog::with_config("/site", Default::default());
        let generator = Generator::new(&blog).unwrap();
        assert_eq!(
            generator.output_path("/"),
            PathBuf::from("/site/public/index.html")
        );
        assert_eq!(
            generator.output_path("/posts/a/"),
            PathBuf::from("/site/public/posts/a/index.html")
        );
    }

    #[test]
    fn test_copy_tree_skips_hidden_and_filtered() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("posts")).unwrap();
        fs::write(src.path().join("posts/a.md"), "# a").unwrap();
        fs::write(src.path().join("posts/a.png"), "png").unwrap();
        fs::write(src.path().join(".hidden"), "x").unwrap();

        let copied = copy_tree(src.path(), dst.path(), |p| !is_markdown_file(p)).unwrap();
        assert_eq!(copied, 1);
        assert!(dst.path().join("posts/a.png").exists());
        assert!(!dst.path().join("posts/a.md").exists());
        assert!(!dst.path().join(".hidden").exists());
    }
}
