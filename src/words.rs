//! Identifier decomposition along snake_case boundaries.

/// Split a snake_case identifier into its constituent words.
///
/// Empty fragments from leading, trailing or doubled underscores are
/// dropped, so every returned slice is non-empty. Case is preserved;
/// callers normalize as needed.
pub fn split_words(identifier: &str) -> Vec<&str> {
    identifier.split('_').filter(|w| !w.is_empty()).collect()
}

/// Whether a name follows the reserved dunder convention.
///
/// Only a full double-underscore wrap qualifies: `__init__` is reserved,
/// `_private` and `get_value` are not. Reserved names are framework
/// vocabulary rather than author-chosen, so they are excluded from
/// aggregation.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}
