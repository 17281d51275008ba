//! Single-character classification helpers
//!
//! ASCII-range predicates over one `char`. The string classifiers in
//! [`crate::string`] build on these for their per-character tests; Unicode-wide
//! classification goes through the standard library's `char` methods instead.

/// Check whether a character is in the 7-bit ASCII range (code point < 128)
pub fn is_ascii(ch: char) -> bool {
    (ch as u32) < 128
}

/// Check whether a character is printable ASCII
///
/// Printable means the code point lies in `[32, 126]` inclusive: space through
/// tilde. Code point 31 (unit separator) and 127 (delete) are not printable.
///
/// # Example
/// ```rust,ignore
/// assert!(is_ascii_printable(' '));
/// assert!(is_ascii_printable('~'));
/// assert!(!is_ascii_printable('\u{7f}'));
/// ```
pub fn is_ascii_printable(ch: char) -> bool {
    matches!(ch as u32, 32..=126)
}

/// Check whether a character is an ASCII control character (code point < 32 or 127)
pub fn is_ascii_control(ch: char) -> bool {
    (ch as u32) < 32 || ch as u32 == 127
}

/// Check whether a character is an ASCII letter (`a-z` or `A-Z`)
pub fn is_ascii_alpha(ch: char) -> bool {
    is_ascii_alpha_upper(ch) || is_ascii_alpha_lower(ch)
}

/// Check whether a character is an uppercase ASCII letter (`A-Z`)
pub fn is_ascii_alpha_upper(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// Check whether a character is a lowercase ASCII letter (`a-z`)
pub fn is_ascii_alpha_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// Check whether a character is an ASCII digit (`0-9`)
pub fn is_ascii_numeric(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check whether a character is an ASCII letter or digit
pub fn is_ascii_alphanumeric(ch: char) -> bool {
    is_ascii_alpha(ch) || is_ascii_numeric(ch)
}
