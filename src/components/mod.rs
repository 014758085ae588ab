//! Presentational components
//!
//! Each component is a pure function from its inputs to a fragment of HTML.
//! Styling goes through the page's [`StyleSheet`](crate::style::StyleSheet).

pub mod blogroll;
pub mod layout;

use serde::Serialize;

pub use layout::HeaderVariant;

/// An external profile link shown as an icon in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Icon path relative to the site root
    pub icon: &'static str,
}

/// The profile links rendered by both header variants
pub const CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        name: "linkedin",
        href: "https://www.linkedin.com/in/brian-walshe-197a7aa8/",
        icon: "/images/LI-In-Bug.png",
    },
    ContactLink {
        name: "github",
        href: "https://github.com/bwalshe",
        icon: "/images/GitHub-Mark-32px.png",
    },
];
