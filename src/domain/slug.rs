// src/domain/slug.rs
//! Slug normalization and suffix-based uniqueness resolution.
//!
//! Every slug in the system (article, blog, category) goes through
//! [`normalize`]. Only article slugs are made unique, via [`resolve_unique`].

use crate::domain::errors::DomainResult;
use std::future::Future;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Turn free text into a URL-safe identifier.
///
/// Lowercases, drops apostrophes and every character that is neither
/// alphanumeric, whitespace nor a hyphen, then folds accents to ASCII and
/// joins the remaining words with single hyphens.
///
/// ```
/// use aventures_core::domain::slug::normalize;
///
/// assert_eq!(normalize("D'hier et d'aujourd'hui"), "dhier-et-daujourdhui");
/// assert_eq!(normalize("  Église & château  "), "eglise-chateau");
/// ```
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    slug::slugify(kept)
}

/// Find the first of `base`, `base-1`, `base-2`, ... for which `exists`
/// answers `false`.
///
/// Candidates are checked one at a time, in order. The answer is only as
/// fresh as the oracle: storage must still enforce uniqueness on write.
pub async fn resolve_unique<F, Fut>(base: &str, mut exists: F) -> DomainResult<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = DomainResult<bool>>,
{
    let mut candidate = base.to_string();
    let mut counter = 1u64;

    while exists(candidate.clone()).await? {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }

    Ok(candidate)
}
