//! Content filters used alongside geometry.

/// Speaker-name labels that sit inside the choice band but are not choices.
pub const COMMON_NAMES: &[&str] = &["哈里", "杰克"];

/// Characters the OCR reads in place of inline controller button glyphs.
pub const CONFUSABLE_GLYPHS: &[char] = &[
    '口', // PS5 square button
];

/// Code point ranges of the Han script.
const HAN_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x2E99),
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),
    (0x3005, 0x3005),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFA6D),
    (0xFA70, 0xFAD9),
    (0x16FE2, 0x16FE3),
    (0x16FF0, 0x16FF1),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2EBE0),
    (0x2EBF0, 0x2EE5D),
    (0x2F800, 0x2FA1D),
    (0x30000, 0x323AF),
];

/// Returns true if the character belongs to the Han script.
pub fn is_han(c: char) -> bool {
    let code = c as u32;
    HAN_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

pub fn contains_han_script(text: &str) -> bool {
    text.chars().any(is_han)
}

/// Exact match against [`COMMON_NAMES`].
pub fn is_known_common_name(text: &str) -> bool {
    COMMON_NAMES.contains(&text)
}

pub fn has_glyph_confusion(text: &str) -> bool {
    text.chars().any(|c| CONFUSABLE_GLYPHS.contains(&c))
}

/// Strips ASCII spaces and trailing full stops so the same subtitle read
/// from two screenshots compares equal.
pub fn normalize_text(text: &str) -> String {
    text.replace(' ', "").trim_end_matches('。').to_string()
}
