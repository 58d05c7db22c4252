//! Dot-path parsing helpers for the state tree.
//!
//! State is addressed by dot-separated string paths (`"ui.activeTab"`).
//! The empty string addresses the root; a path containing an empty segment
//! (`"test."`, `"test..invalid"`, `".leading"`) is malformed and rejected
//! by the caller rather than partially applied.

/// Splits a path into its segments, rejecting malformed paths.
///
/// Returns `None` when the path is empty or contains an empty segment
/// (trailing dot, double dot, leading dot). Callers decide whether a
/// malformed path is a warning (writes) or a silent miss (reads).
///
/// # Examples
///
/// ```ignore
/// segments("ui.activeTab") -> Some(vec!["ui", "activeTab"])
/// segments("test.")        -> None
/// segments("test..x")      -> None
/// segments("")             -> None
/// ```
pub(crate) fn segments(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(parts)
}

/// Enumerates every strict ancestor of a path, deepest first.
///
/// For `"parent.child.grandchild"` this yields `"parent.child"` then
/// `"parent"`. A single-segment path has no ancestors.
pub(crate) fn ancestors(path: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = path;
    while let Some(index) = current.rfind('.') {
        current = &current[..index];
        result.push(current.to_string());
    }
    result
}
