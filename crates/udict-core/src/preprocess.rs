pub const ELLIPSIS: &str = "...";

/// Drop embedded newlines, carriage returns and tabs, then trim.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Cap `text` at `max` chars, marking the cut with an ellipsis.
pub fn truncate(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push_str(ELLIPSIS);
            truncated
        }
        None => text,
    }
}
