//! Input normalization shared by the checks.

/// Keep only ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// True for empty or whitespace-only input.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}
