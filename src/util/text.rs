use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// List rows cap descriptions at this many characters.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// Truncate to at most `max_chars` characters, appending `…` when the input
/// is longer. An input of exactly `max_chars` characters is returned as-is.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push('\u{2026}');
    out
}

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Collapse a possibly multi-line user string into a single renderable line.
/// All user text goes through here before hitting a one-line row, so control
/// characters can never corrupt the layout.
pub fn sanitize_inline(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_at_boundary() {
        let exactly_80: String = "x".repeat(80);
        assert_eq!(truncate_chars(&exactly_80, 80), exactly_80);

        let eighty_one: String = "x".repeat(81);
        let truncated = truncate_chars(&eighty_one, 80);
        assert_eq!(truncated.chars().count(), 81); // 80 chars + ellipsis
        assert_eq!(&truncated[..80], &eighty_one[..80]);
        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        let s = "äöü";
        assert_eq!(truncate_chars(s, 3), "äöü");
        assert_eq!(truncate_chars(s, 2), "äö\u{2026}");
    }

    #[test]
    fn test_sanitize_inline() {
        assert_eq!(sanitize_inline("a\nb\tc"), "a b c");
        assert_eq!(sanitize_inline("plain"), "plain");
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        // CJK chars are two cells wide
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("日本語", 5), "日本\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(truncate_to_width("abc", 1), "\u{2026}");
    }
}
