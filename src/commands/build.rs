//! Build the static site

use anyhow::Result;

use crate::generator::{BuildSummary, Generator};
use crate::query::ContentIndex;
use crate::Blog;

/// Index the content and write the whole site
pub fn run(blog: &Blog) -> Result<BuildSummary> {
    let start = std::time::Instant::now();

    let index = ContentIndex::load(blog)?;
    tracing::info!("Loaded {} posts", index.posts().len());

    let generator = Generator::new(blog)?;
    let summary = generator.generate(&index)?;

    tracing::info!(
        "Generated {} pages and copied {} assets in {:.2}s",
        summary.pages,
        summary.assets,
        start.elapsed().as_secs_f64()
    );

    Ok(summary)
}
