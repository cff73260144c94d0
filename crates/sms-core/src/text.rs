//! Text utilities for SMS bodies.
//!
//! SMS bodies are sent without emoji, and every line break is billed as a
//! single character regardless of how the editor encoded it.

/// Code point ranges removed from SMS bodies.
///
/// Covers the pictographic blocks plus the joiners and modifiers that only
/// make sense next to them (ZWJ, variation selector 16, keycap, tag
/// characters).
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x200D, 0x200D),   // zero width joiner
    (0x20E3, 0x20E3),   // combining enclosing keycap
    (0x2600, 0x26FF),   // miscellaneous symbols
    (0x2700, 0x27BF),   // dingbats
    (0x2B50, 0x2B55),   // stars and circles
    (0xFE0F, 0xFE0F),   // variation selector 16
    (0x1F000, 0x1F0FF), // mahjong, domino and playing cards
    (0x1F1E6, 0x1F1FF), // regional indicators (flags)
    (0x1F300, 0x1F5FF), // symbols and pictographs, skin tones
    (0x1F600, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
    (0xE0020, 0xE007F), // tag characters
];

/// Whether `ch` falls in one of the disallowed emoji ranges.
pub fn is_emoji(ch: char) -> bool {
    let code = u32::from(ch);
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Remove emoji and pictographic code points.
pub fn strip_emoji(text: &str) -> String {
    text.chars().filter(|&ch| !is_emoji(ch)).collect()
}

/// Replace every line break (`\r\n`, `\r`, `\n`) with a single `\n`.
pub fn normalize_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Character count with each line break counted once.
pub fn effective_length(text: &str) -> usize {
    normalize_line_breaks(text).chars().count()
}

/// Convert a character offset into a byte offset, clamped to the text end.
pub fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(idx, _)| idx)
}
