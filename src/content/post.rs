//! Post model

use chrono::{DateTime, Local};

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Rendered HTML content
    pub content: String,

    /// Plain-text excerpt, already pruned
    pub excerpt: String,

    /// Public URL of the thumbnail image
    pub featured_image: Option<String>,

    /// Address of the post, e.g. `/posts/hello-world/`
    pub slug: String,

    /// Source file path relative to the content directory
    pub source: String,

    /// Drafts are only rendered when `render_drafts` is set
    pub draft: bool,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: DateTime<Local>, source: String) -> Self {
        let slug = format!("/{}/", slug::slugify(&title));
        Self {
            title,
            date,
            content: String::new(),
            excerpt: String::new(),
            featured_image: None,
            slug,
            source,
            draft: false,
        }
    }

    /// Directory of the post relative to the content directory, `""` at the top level
    pub fn source_dir(&self) -> &str {
        self.source
            .rfind('/')
            .map(|pos| &self.source[..pos])
            .unwrap_or("")
    }
}
