//! Central UI style constants and helpers.

pub const COLOR_PROFILE: u32 = 0xF1C40F; // Gold

pub const EMOJI_PREV: &str = "⬅️";
pub const EMOJI_NEXT: &str = "➡️";
pub const EMOJI_TROPHY: &str = "🏆";

// Discord caps embed field values at 1024 chars.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Cuts `text` to at most `max` chars, ending with an ellipsis when anything was dropped.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_chars("abc", 5), "abc");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let s = "🏆🏆🏆🏆";
        let out = truncate_chars(s, 3);
        assert_eq!(out.chars().count(), 3);
        assert!(out.ends_with('…'));
    }
}
