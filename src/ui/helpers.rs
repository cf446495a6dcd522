//! Shared text layout helpers.
//!
//! Widths are counted in `char`s, never bytes, so names with multi-byte
//! characters are padded and truncated without splitting a character.

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Appends `text` centred in a line of `cols` characters, truncating if needed.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let width = char_width(&text);
    let left = cols.saturating_sub(width) / 2;

    out.push_str(&" ".repeat(left));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(left + width)));
}
