//! Content module - loads posts and renders their markdown

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use markdown::{prune, MarkdownRenderer};
pub use post::Post;
