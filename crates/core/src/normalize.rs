//! Query canonicalization.
//!
//! Two raw queries that differ only in case or whitespace layout must map to
//! the same cache key; this module defines that mapping.

/// Canonicalize a raw query into its cache-key form.
///
/// Trims leading/trailing whitespace, lowercases, and collapses every run of
/// whitespace (space, tab, newline) into a single space. Pure and total.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}
