//! Note field defaults, list parsing, and the dashboard search predicate.
//!
//! The editing surface submits tags and share lists as comma-separated
//! text; [`parse_comma_list`] is the single place that input is turned
//! into an ordered, trimmed, empty-filtered sequence.

/// Title applied when a note is created with a blank title.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Subject applied when a note is created with a blank subject.
pub const DEFAULT_SUBJECT: &str = "General";

/// Fallback subject names shown when no classes exist yet.
///
/// Presentation-layer substitutes, never persisted.
pub const FALLBACK_CLASS_NAMES: &[&str] = &["General", "Web Technologies", "Mobile Dev"];

/// Split a comma-separated input into trimmed, non-empty entries.
///
/// Order is preserved and no deduplication is performed:
/// `"math, , physics ,"` yields `["math", "physics"]`.
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Free-text search predicate over a note's title, subject, and tags.
///
/// Case-insensitive substring match; any one field matching qualifies.
pub fn matches_search(query: &str, title: &str, subject: &str, tags: &[String]) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&needle)
        || subject.to_lowercase().contains(&needle)
        || tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}
