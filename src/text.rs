//! Unicode width measurement for terminal cells.
//!
//! Uses `unicode-width` (East Asian Width tables) and
//! `unicode-segmentation` (UAX #29 grapheme cluster boundaries) as the
//! foundation, with explicit handling for multi-codepoint emoji sequences:
//! ZWJ families, skin tones, flags, and keycaps all measure as width 2.
//!
//! The renderer treats every width as an opaque non-negative integer; these
//! functions are the default measurement the [`Screen`](crate::Screen)
//! trait supplies, and screens with different measurement rules can
//! override it.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single Unicode codepoint in terminal cells.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for normal-width characters (ASCII, Latin, Cyrillic, etc.)
/// - `2` for wide characters (CJK ideographs, fullwidth forms, emoji)
#[inline]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a grapheme cluster in terminal cells.
///
/// A grapheme cluster is a user-perceived character that may span multiple
/// codepoints: `e` + combining acute is width 1, a family ZWJ sequence or a
/// regional-indicator flag pair is width 2.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return 0,
    };

    // Single codepoint: East Asian Width covers it.
    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Regional indicator pair (flag emoji).
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    // Trailing modifiers that force emoji presentation.
    for c in chars {
        match c as u32 {
            0x200D => return 2,            // Zero-Width Joiner sequence
            0xFE0F => return 2,            // VS16 emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // Fitzpatrick skin tone modifier
            0x20E3 => return 2,            // Combining enclosing keycap
            _ => {}
        }
    }

    // Base character plus combining marks: the base width only.
    char_width(first)
}

/// Display width of a whole string in terminal cells.
///
/// Sums grapheme-cluster widths, with a byte-counting fast path for pure
/// ASCII (control bytes count as zero).
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    if s.is_ascii() {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }

    s.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── char_width ──

    #[test]
    fn char_width_ascii() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('~'), 1);
    }

    #[test]
    fn char_width_control_and_combining() {
        assert_eq!(char_width('\n'), 0);
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\u{0301}'), 0); // combining acute
    }

    #[test]
    fn char_width_wide() {
        assert_eq!(char_width('你'), 2);
        assert_eq!(char_width('한'), 2);
        assert_eq!(char_width('Ａ'), 2); // fullwidth A
    }

    // ── grapheme_width ──

    #[test]
    fn grapheme_width_single() {
        assert_eq!(grapheme_width("a"), 1);
        assert_eq!(grapheme_width("界"), 2);
        assert_eq!(grapheme_width(""), 0);
    }

    #[test]
    fn grapheme_width_combining_marks() {
        assert_eq!(grapheme_width("e\u{0301}"), 1);
        assert_eq!(grapheme_width("a\u{030A}"), 1);
    }

    #[test]
    fn grapheme_width_emoji_sequences() {
        // Family ZWJ sequence
        assert_eq!(grapheme_width("👨\u{200D}👩\u{200D}👧\u{200D}👦"), 2);
        // Skin tone modifier
        assert_eq!(grapheme_width("👍\u{1F3FD}"), 2);
        // Regional indicator flag
        assert_eq!(grapheme_width("🇺🇸"), 2);
        // Keycap
        assert_eq!(grapheme_width("1\u{FE0F}\u{20E3}"), 2);
    }

    // ── string_width ──

    #[test]
    fn string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a\tb"), 2);
    }

    #[test]
    fn string_width_mixed() {
        assert_eq!(string_width("你好"), 4);
        assert_eq!(string_width("hi你好"), 6);
        assert_eq!(string_width("cafe\u{0301}"), 4);
        assert_eq!(string_width("👨\u{200D}👩\u{200D}👧\u{200D}👦!"), 3);
    }
}
