//! Shared test utilities for the franchise-site test suite.
//!
//! Provides fixture documents, whole-document assertions for edit tests, and
//! small extractors over rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let before = sample_content();
//! let after = editor::set_field(&before, Section::Footer, "address", "부산").unwrap();
//! assert_only_section_changed(&before, &after, "footer");
//!
//! let html = render_page(&after, &SiteConfig::default()).into_string();
//! assert_eq!(rendered_section_ids(&html)[0], "hero");
//! ```

use crate::content::{InteriorItem, ItemId, SiteContent};

// =========================================================================
// Fixture documents
// =========================================================================

/// The built-in document. Review ids are `r1`..`r4`, menu ids `1`..`6`.
pub fn sample_content() -> SiteContent {
    SiteContent::default()
}

/// The built-in document with exactly three interior items named A, B, C.
pub fn three_interiors() -> SiteContent {
    let mut content = SiteContent::default();
    content.interior.items = ["A", "B", "C"]
        .into_iter()
        .map(|name| InteriorItem {
            id: ItemId::new(format!("int-{}", name.to_lowercase())),
            name: name.to_string(),
            image: format!("https://example.com/{name}.jpg"),
        })
        .collect();
    content
}

// =========================================================================
// Document assertions
// =========================================================================

/// Assert that every top-level key except `section` serializes identically.
pub fn assert_only_section_changed(before: &SiteContent, after: &SiteContent, section: &str) {
    let before = serde_json::to_value(before).unwrap();
    let after = serde_json::to_value(after).unwrap();
    let before = before.as_object().unwrap();
    let after = after.as_object().unwrap();
    assert_eq!(
        before.keys().collect::<Vec<_>>(),
        after.keys().collect::<Vec<_>>(),
        "top-level keys differ"
    );
    for (key, value) in before {
        if key == section {
            continue;
        }
        assert_eq!(
            Some(value),
            after.get(key),
            "section '{key}' changed, expected only '{section}' to change"
        );
    }
}

// =========================================================================
// HTML extractors
// =========================================================================

/// The `id` of every `<section>` element, in document order.
pub fn rendered_section_ids(html: &str) -> Vec<String> {
    html.match_indices("<section id=\"")
        .map(|(start, pattern)| {
            let rest = &html[start + pattern.len()..];
            let end = rest.find('"').unwrap();
            rest[..end].to_string()
        })
        .collect()
}

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
