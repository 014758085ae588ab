//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Resolve an image referenced from a post's front-matter into a public URL.
///
/// Absolute paths and external URLs are kept (root-prefixed where local).
/// Relative paths are resolved against the post's directory inside the
/// content directory, which is mirrored into the public directory.
///
/// # Examples
/// ```ignore
/// asset_url(&config, "posts/hello", "./thumb.png") // -> "/posts/hello/thumb.png"
/// ```
pub fn asset_url(config: &SiteConfig, source_dir: &str, image: &str) -> String {
    let image = image.trim();
    if is_external(image) || image.starts_with('/') {
        return url_for(config, image);
    }

    let mut parts: Vec<&str> = source_dir.split('/').filter(|p| !p.is_empty()).collect();
    for part in image.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    url_for(config, &parts.join("/"))
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/blog/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for(&config, "about/"), "/blog/about/");
        assert_eq!(url_for(&config, ""), "/blog/");
        assert_eq!(url_for(&SiteConfig::default(), "/post-a/"), "/post-a/");
    }

    #[test]
    fn test_asset_url_relative_to_post() {
        let config = SiteConfig::default();
        assert_eq!(asset_url(&config, "posts/hello", "./thumb.png"), "/posts/hello/thumb.png");
        assert_eq!(asset_url(&config, "posts/hello", "../shared/a.jpg"), "/posts/shared/a.jpg");
        assert_eq!(asset_url(&config, "", "thumb.png"), "/thumb.png");
    }

    #[test]
    fn test_asset_url_absolute_and_external() {
        let config = test_config();
        assert_eq!(asset_url(&config, "posts", "/images/a.png"), "/blog/images/a.png");
        assert_eq!(
            asset_url(&config, "posts", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
