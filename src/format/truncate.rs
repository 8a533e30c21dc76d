use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to at most `max_width` terminal columns
///
/// Cuts on character boundaries using display width, never on raw bytes: a
/// double-width CJK character or emoji that would straddle the limit is
/// dropped whole, and zero-width combining marks stay attached to their base
/// character.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

/// Like [`truncate_to_width`] but appends `...` when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = truncate_to_width(text, max_width.saturating_sub(3));
    out.push_str("...");
    out
}
