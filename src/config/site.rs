//! Site configuration (_config.yml)

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub byline: String,

    // URL
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Writing
    pub render_drafts: bool,
    pub highlight_theme: String,
    pub line_numbers: bool,

    // Listing
    /// Moment.js style format used for post dates
    pub date_format: String,
    /// Maximum excerpt length in characters
    pub excerpt_length: usize,
    #[serde(default)]
    pub thumbnail: ThumbnailConfig,

    // Header
    pub header_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            byline: String::new(),

            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            render_drafts: false,
            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,

            date_format: "DD MMMM, YYYY".to_string(),
            excerpt_length: 500,
            thumbnail: ThumbnailConfig::default(),

            header_image: "/images/blogheader.png".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Fixed thumbnail dimensions for the blogroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 250,
            height: 150,
        }
    }
}
