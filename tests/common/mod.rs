#![allow(dead_code)]

use shortcode::prelude::*;

/// Builds a registry pre-populated with the given URLs, returning the
/// registered links in input order.
pub fn registry_with_urls(urls: &[&str]) -> (Registry, Vec<Link>) {
    let registry = Registry::new();
    let links = urls
        .iter()
        .map(|url| registry.shorten(url).expect("shorten failed"))
        .collect();
    (registry, links)
}

/// Asserts that a code has the default shape: 6 ASCII alphanumerics.
pub fn assert_code_shape(code: &str) {
    assert_eq!(code.len(), 6, "code '{}' should be 6 characters", code);
    assert!(
        code.chars().all(|c| c.is_ascii_alphanumeric()),
        "code '{}' should be ASCII alphanumeric",
        code
    );
}
