//! String utilities for the domain layer.

/// One-line preview of `s`, at most `max_chars` characters including the
/// trailing `...` when truncated.
///
/// Whitespace runs (including newlines) collapse to a single space so the
/// preview fits on a progress line or a log record.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push_str("...");
    out
}
