//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="blogroll {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}
