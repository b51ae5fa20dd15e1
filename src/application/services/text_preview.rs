const PREVIEW_CHARS: usize = 100;

/// Shortens extracted text for logs and UI previews.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    match trimmed.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
