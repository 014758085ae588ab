//! List site content

use anyhow::Result;

use crate::query::{ContentIndex, PostConnection};
use crate::Blog;

/// Print every post in blogroll order
pub fn run(blog: &Blog) -> Result<()> {
    let index = ContentIndex::load(blog)?;
    print!("{}", format_listing(&index.all_posts()));
    Ok(())
}

fn format_listing(connection: &PostConnection) -> String {
    let mut out = format!("Posts ({}):\n", connection.total_count);
    for post in &connection.edges {
        out.push_str(&format!("  {} - {} [{}]\n", post.date, post.title, post.slug));
    }
    out
}
