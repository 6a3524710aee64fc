//! Small helpers shared by the scraper and the log statements.

use scraper::ElementRef;

/// Visible text of an element with every text fragment trimmed.
///
/// Each descendant text node is trimmed on both ends, empty fragments are
/// dropped and the rest are concatenated without a separator.
///
/// # Examples
///
/// ```ignore
/// // <a>\n  Budget passed \n</a>  ->  "Budget passed"
/// // <a> Breaking: <b>floods</b></a> ->  "Breaking:floods"
/// ```
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (never inside a UTF-8
/// sequence) and suffixed with `"…(+N bytes)"`.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of bytes to keep
///
/// # Returns
///
/// The original string if it fits, otherwise the truncated prefix with the
/// dropped byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
