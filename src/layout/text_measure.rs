//! Cell widths of text, used for the intrinsic size of text-bearing
//! controls and for fitting window titles.

/// Code point ranges drawn two cells wide.
const WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // Hangul Jamo
    (0x2E80, 0x9FFF),   // CJK radicals through unified ideographs
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE10, 0xFE1F),   // vertical forms
    (0xFE30, 0xFE6F),   // CJK compatibility and small forms
    (0xFF00, 0xFF60),   // fullwidth forms
    (0xFFE0, 0xFFE6),   // fullwidth signs
    (0x1F300, 0x1F9FF), // pictographs and emoji
    (0x20000, 0x2FFFF), // CJK extension planes
];

fn char_width(c: char) -> u16 {
    match c {
        c if c.is_ascii_control() => 0,
        c if c.is_ascii() => 1,
        c => {
            let code = u32::from(c);
            let wide = WIDE_RANGES
                .iter()
                .any(|&(first, last)| (first..=last).contains(&code));
            if wide { 2 } else { 1 }
        }
    }
}

/// Width of `text` in cells.
pub fn string_width(text: &str) -> u16 {
    text.chars()
        .map(char_width)
        .fold(0, u16::saturating_add)
}

/// Shorten `text` to at most `width` cells, marking the cut with `…`.
pub fn truncate_text(text: &str, width: u16) -> String {
    if string_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // leave one cell for the ellipsis
    let budget = width - 1;
    let mut used = 0u16;
    let kept: String = text
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();

    kept + "…"
}
