//! Utility functions.

use unicode_width::UnicodeWidthChar;

/// Tab stops are every 8 columns.
pub const TAB_STOP: usize = 8;

/// Byte-level `isprint`: ASCII graphic characters and space.
pub fn is_print(b: u8) -> bool {
    b == b' ' || b.is_ascii_graphic()
}

/// Word separators for keyword and number recognition.
pub fn is_separator(b: u8) -> bool {
    b == 0 || b.is_ascii_whitespace() || b",.()+-/*=~%[];".contains(&b)
}

/// Width a tab starting at rendered column `rx` occupies.
fn tab_width(rx: usize) -> usize {
    TAB_STOP - rx % TAB_STOP
}

/// Rendered (tab-expanded) column of raw byte index `col`.
///
/// Positions past the end of `raw` count one column each.
pub fn render_col(raw: &[u8], col: usize) -> usize {
    let mut rx = 0;
    for &b in raw.iter().take(col) {
        rx += if b == b'\t' { tab_width(rx) } else { 1 };
    }
    rx + col.saturating_sub(raw.len())
}

/// Raw byte index whose rendered cell covers rendered column `rx`.
pub fn raw_col(raw: &[u8], rx: usize) -> usize {
    let mut cur = 0;
    for (cx, &b) in raw.iter().enumerate() {
        cur += if b == b'\t' { tab_width(cur) } else { 1 };
        if cur > rx {
            return cx;
        }
    }
    raw.len()
}

/// Longest prefix of `s` that fits in `width` terminal columns.
///
/// Always cuts on a `char` boundary.
pub fn truncate_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (bi, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + w > width {
            return &s[..bi];
        }
        used += w;
    }
    s
}
