//! Header label normalization into snake_case field names.

use serde::{Deserialize, Serialize};

/// How header labels are turned into field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    /// Identifier-safe snake_case. Every run of separators collapses to a
    /// single `_` and characters that are neither alphanumeric nor `_` are
    /// dropped. Applying it twice gives the same result as applying it once.
    #[default]
    Canonical,
    /// Fixed single-pass rewrite kept for key compatibility with older
    /// exports: separators become `_`, `___` then `__` are each replaced once
    /// across the string, and unlisted punctuation (such as `$`) is kept.
    /// A run of five separators therefore still yields `__`.
    Legacy,
}

impl HeaderStyle {
    /// Normalizes a header label with this style.
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Canonical => canonical(value),
            Self::Legacy => legacy(value),
        }
    }
}

/// Converts a table header to a snake_case field name.
///
/// # Example
///
/// ```
/// use tablerow_ingest::snakecase;
///
/// assert_eq!(snakecase("  Order ID "), "order_id");
/// assert_eq!(snakecase("Unit Price ($)"), "unit_price");
/// assert_eq!(snakecase("Start/End Date"), "start_end_date");
/// ```
pub fn snakecase(value: &str) -> String {
    HeaderStyle::Canonical.apply(value)
}

/// Converts a table header to a field name using an explicit style.
pub fn snakecase_with(value: &str, style: HeaderStyle) -> String {
    style.apply(value)
}

fn is_separator(c: char) -> bool {
    matches!(c, '/' | '=' | ':' | '-')
}

fn canonical(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let mut field = String::with_capacity(lowered.len());

    for c in lowered.chars() {
        if c == '_' || c.is_whitespace() || is_separator(c) {
            if !field.ends_with('_') {
                field.push('_');
            }
        } else if c.is_alphanumeric() {
            field.push(c);
        }
    }

    field.trim_matches('_').to_string()
}

fn legacy(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if c == ' ' || is_separator(c) { '_' } else { c })
        .filter(|c| !matches!(c, '(' | ')' | '.'))
        .collect();

    replaced
        .replace("___", "_")
        .replace("__", "_")
        .trim_matches('_')
        .to_string()
}
