//! Content index - answers the queries the components render from
//!
//! The index is built once per build from the loaded posts. Components never
//! see [`Post`] directly; they receive the flattened records below, already
//! sorted and formatted.

use anyhow::Result;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::helpers::{format_date, url_for};
use crate::Blog;

/// A fixed-size image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// One entry of the blogroll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    /// Date already formatted for display
    pub date: String,
    pub thumbnail: Option<FixedImage>,
    /// Navigable address of the post
    pub slug: String,
    pub excerpt: String,
}

/// Result of the "all posts" query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostConnection {
    pub total_count: usize,
    pub edges: Vec<PostRecord>,
}

impl PostConnection {
    pub fn new(edges: Vec<PostRecord>) -> Self {
        Self {
            total_count: edges.len(),
            edges,
        }
    }
}

/// Site title and byline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub byline: String,
}

/// Indexed posts, newest first
pub struct ContentIndex {
    config: SiteConfig,
    posts: Vec<Post>,
}

impl ContentIndex {
    /// Load and index every post of the blog
    pub fn load(blog: &Blog) -> Result<Self> {
        let posts = ContentLoader::new(blog).load_posts()?;
        tracing::debug!("Indexed {} posts", posts.len());
        Ok(Self::from_posts(blog.config.clone(), posts))
    }

    /// Index an already loaded set of posts
    pub fn from_posts(config: SiteConfig, mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Self { config, posts }
    }

    /// All indexed posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// All posts sorted by date descending, with their total count
    pub fn all_posts(&self) -> PostConnection {
        PostConnection::new(self.posts.iter().map(|p| self.record(p)).collect())
    }

    /// Title and byline from the site configuration
    pub fn site_metadata(&self) -> SiteMetadata {
        SiteMetadata {
            title: self.config.title.clone(),
            byline: self.config.byline.clone(),
        }
    }

    /// Display form of a post date
    pub fn format_date(&self, post: &Post) -> String {
        format_date(&post.date, &self.config.date_format)
    }

    fn record(&self, post: &Post) -> PostRecord {
        let thumbnail = post.featured_image.as_ref().map(|src| FixedImage {
            src: src.clone(),
            width: self.config.thumbnail.width,
            height: self.config.thumbnail.height,
        });

        PostRecord {
            id: post.source.clone(),
            title: post.title.clone(),
            date: self.format_date(post),
            thumbnail,
            slug: url_for(&self.config, &post.slug),
            excerpt: post.excerpt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn post(title: &str, year: i32, month: u32, day: u32) -> Post {
        let date = Local.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
        let mut post = Post::new(title.to_string(), date, format!("posts/{}.md", title));
        post.excerpt = format!("About {}", title);
        post
    }

    #[test]
    fn test_all_posts_sorted_newest_first() {
        let index = ContentIndex::from_posts(
            SiteConfig::default(),
            vec![post("old", 2019, 3, 1), post("new", 2021, 1, 1), post("mid", 2020, 6, 1)],
        );

        let connection = index.all_posts();
        assert_eq!(connection.total_count, 3);
        let titles: Vec<_> = connection.edges.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_record_fields() {
        let mut p = post("post-a", 2020, 1, 1);
        p.slug = "/post-a/".to_string();
        p.featured_image = Some("/posts/a.png".to_string());
        let index = ContentIndex::from_posts(SiteConfig::default(), vec![p]);

        let record = &index.all_posts().edges[0];
        assert_eq!(record.id, "posts/post-a.md");
        assert_eq!(record.date, "01 January, 2020");
        assert_eq!(record.slug, "/post-a/");
        assert_eq!(record.excerpt, "About post-a");
        assert_eq!(
            record.thumbnail,
            Some(FixedImage {
                src: "/posts/a.png".to_string(),
                width: 250,
                height: 150,
            })
        );
    }

    #[test]
    fn test_record_without_thumbnail() {
        let index = ContentIndex::from_posts(SiteConfig::default(), vec![post("bare", 2020, 1, 1)]);
        assert!(index.all_posts().edges[0].thumbnail.is_none());
    }

    #[test]
    fn test_slug_includes_root() {
        let mut config = SiteConfig::default();
        config.root = "/blog/".to_string();
        let index = ContentIndex::from_posts(config, vec![post("x", 2020, 1, 1)]);
        assert_eq!(index.all_posts().edges[0].slug, "/blog/x/");
    }

    #[test]
    fn test_empty_index() {
        let index = ContentIndex::from_posts(SiteConfig::default(), Vec::new());
        assert_eq!(index.all_posts(), PostConnection::default());
    }

    #[test]
    fn test_site_metadata() {
        let mut config = SiteConfig::default();
        config.title = "Brian Walshe".to_string();
        config.byline = "Data and code".to_string();
        let index = ContentIndex::from_posts(config, Vec::new());
        assert_eq!(
            index.site_metadata(),
            SiteMetadata {
                title: "Brian Walshe".to_string(),
                byline: "Data and code".to_string(),
            }
        );
    }
}
