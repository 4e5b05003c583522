//! Text helpers for card previews.

const ELLIPSIS: &str = "...";

/// First `max_chars` characters of `text` followed by an ellipsis.
///
/// The ellipsis is appended unconditionally so every card preview reads the
/// same whether or not the description was actually cut.
pub fn preview_text(text: &str, max_chars: usize) -> String {
    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let mut out = String::with_capacity(cut + ELLIPSIS.len());
    out.push_str(&text[..cut]);
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::preview_text;

    #[test]
    fn cuts_long_text_at_char_limit() {
        let text = "a".repeat(200);
        let preview = preview_text(&text, 150);
        assert_eq!(preview.len(), 153);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn short_text_still_gets_ellipsis() {
        assert_eq!(preview_text("Short.", 150), "Short....");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(preview_text(&text, 3), "ééé...");
    }
}
