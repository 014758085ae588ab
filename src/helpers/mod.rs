//! Helper functions shared by the content loader, components and pages

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
