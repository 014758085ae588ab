//! Scoped style rules
//!
//! Components attach CSS declarations to the nodes they render by asking the
//! page's [`StyleSheet`] for a class name. The class name is derived from the
//! declarations themselves, so identical rules collapse into one class and
//! repeated builds produce identical markup. The collected rules are inlined
//! into the page `<head>`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Collected scoped rules for one rendered document
#[derive(Debug, Default, Clone)]
pub struct StyleSheet {
    rules: Vec<(String, String)>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `declarations` and return the class name that applies them
    pub fn scoped(&mut self, declarations: &str) -> String {
        let declarations = normalize(declarations);
        let class = class_name(&declarations);

        if !self.rules.iter().any(|(existing, _)| *existing == class) {
            self.rules.push((class.clone(), declarations));
        }

        class
    }

    /// Number of distinct rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render every rule, in registration order
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|(class, declarations)| format!(".{} {{ {} }}", class, declarations))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Collapse whitespace and make sure the block ends with `;`
fn normalize(declarations: &str) -> String {
    let joined = declarations
        .split(';')
        .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join("; ");

    if joined.is_empty() {
        joined
    } else {
        format!("{};", joined)
    }
}

fn class_name(declarations: &str) -> String {
    let mut hasher = DefaultHasher::new();
    declarations.hash(&mut hasher);
    format!("css-{:x}", hasher.finish() & 0xffff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_rules_share_a_class() {
        let mut sheet = StyleSheet::new();
        let a = sheet.scoped("float: right; margin-right: 10px");
        let b = sheet.scoped("\n    float: right;\n    margin-right: 10px;\n");
        assert_eq!(a, b);
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_distinct_rules_get_distinct_classes() {
        let mut sheet = StyleSheet::new();
        let a = sheet.scoped("color: #bbb");
        let b = sheet.scoped("color: #fff");
        assert_ne!(a, b);
        assert!(a.starts_with("css-"));
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_to_css() {
        let mut sheet = StyleSheet::new();
        let class = sheet.scoped("max-width: 800px;   margin: auto");
        assert_eq!(
            sheet.to_css(),
            format!(".{} {{ max-width: 800px; margin: auto; }}", class)
        );
    }
}
