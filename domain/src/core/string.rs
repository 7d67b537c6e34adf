//! String utilities for the domain layer.

/// Shorten `s` to at most `max_chars` characters, appending an ellipsis when cut.
///
/// Counts characters rather than bytes so multi-byte text never splits.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.char_indices();
    match chars.nth(max_chars) {
        None => s.to_string(),
        Some(_) => {
            let keep = max_chars.saturating_sub(1);
            let cut = s.char_indices().nth(keep).map(|(i, _)| i).unwrap_or(s.len());
            format!("{}…", &s[..cut])
        }
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
