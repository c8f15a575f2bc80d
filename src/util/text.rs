// src/util/text.rs

/// Extract the first non-empty line of a note body, trimmed.
///
/// # Examples
///
/// ```
/// use notitas::util::text::extract_first_line;
///
/// let body = "\n  Buy milk  \nand eggs";
/// assert_eq!(extract_first_line(body), "Buy milk");
/// ```
pub fn extract_first_line(body: &str) -> String {
    body.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Cut `text` to at most `max_chars` characters, ending in `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
