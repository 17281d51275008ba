//! Case and character-class scanners
//!
//! Each function scans its input left to right at most once and short-circuits
//! on the first disqualifying character. Classification is Unicode-aware
//! through the standard library's `char` predicates; only the explicitly
//! ASCII-named checks restrict themselves to the ASCII range.
//!
//! The `None`/`""` truth tables fall into two groups. Checks that assert a
//! positive property of the content (`is_alpha`, `is_numeric`, the case
//! checks) are false for both `None` and `""`. Checks that merely exclude
//! characters (`is_alpha_space`, `is_whitespace`, `is_ascii_printable`, ...)
//! are false for `None` but vacuously true for `""` — absence and emptiness
//! deliberately diverge there.

use super::length;
use crate::chars;

/// Check whether a sequence contains only lowercase letters
///
/// Absent and empty sequences are false.
///
/// ```text
/// is_all_lower_case(None)          = false
/// is_all_lower_case(Some(""))      = false
/// is_all_lower_case(Some("  "))    = false
/// is_all_lower_case(Some("abc"))   = true
/// is_all_lower_case(Some("abC"))   = false
/// is_all_lower_case(Some("ab c"))  = false
/// is_all_lower_case(Some("ab1c"))  = false
/// ```
pub fn is_all_lower_case(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        !s.is_empty() && s.chars().all(char::is_lowercase)
    })
}

/// Check whether a sequence contains at least one lowercase letter
pub fn is_any_lower_case(input: Option<&str>) -> bool {
    input.map_or(false, |s| s.chars().any(char::is_lowercase))
}

/// Check whether a sequence contains no lowercase letters
///
/// Absent and empty sequences are true.
pub fn is_none_lower_case(input: Option<&str>) -> bool {
    !is_any_lower_case(input)
}

/// Check whether a sequence contains only uppercase letters
///
/// Absent and empty sequences are false.
///
/// ```text
/// is_all_upper_case(None)          = false
/// is_all_upper_case(Some(""))      = false
/// is_all_upper_case(Some("ABC"))   = true
/// is_all_upper_case(Some("aBC"))   = false
/// is_all_upper_case(Some("A1C"))   = false
/// ```
pub fn is_all_upper_case(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        !s.is_empty() && s.chars().all(char::is_uppercase)
    })
}

/// Check whether a sequence contains at least one uppercase letter
pub fn is_any_upper_case(input: Option<&str>) -> bool {
    input.map_or(false, |s| s.chars().any(char::is_uppercase))
}

/// Check whether a sequence contains no uppercase letters
///
/// Absent and empty sequences are true.
pub fn is_none_upper_case(input: Option<&str>) -> bool {
    !is_any_upper_case(input)
}

/// Check whether a sequence mixes uppercase and lowercase letters
///
/// True when the sequence contains at least one uppercase and at least one
/// lowercase letter. Sequences of length 0 or 1 cannot mix and are false, as
/// are absent sequences.
///
/// ```text
/// is_mixed_case(None)           = false
/// is_mixed_case(Some(""))       = false
/// is_mixed_case(Some("ABC"))    = false
/// is_mixed_case(Some("abc"))    = false
/// is_mixed_case(Some("aBc"))    = true
/// is_mixed_case(Some("A1c"))    = true
/// is_mixed_case(Some("aC\t"))   = true
/// ```
pub fn is_mixed_case(input: Option<&str>) -> bool {
    if length(input) <= 1 {
        return false;
    }
    let Some(s) = input else { return false };
    let mut contains_upper = false;
    let mut contains_lower = false;
    for ch in s.chars() {
        if ch.is_uppercase() {
            contains_upper = true;
        } else if ch.is_lowercase() {
            contains_lower = true;
        }
        if contains_upper && contains_lower {
            return true;
        }
    }
    false
}

/// Check whether a sequence contains only Unicode letters
///
/// Absent and empty sequences are false.
///
/// ```text
/// is_alpha(None)           = false
/// is_alpha(Some(""))       = false
/// is_alpha(Some("  "))     = false
/// is_alpha(Some("abc"))    = true
/// is_alpha(Some("ab2c"))   = false
/// is_alpha(Some("ab-c"))   = false
/// ```
pub fn is_alpha(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        !s.is_empty() && s.chars().all(char::is_alphabetic)
    })
}

/// Check whether a sequence contains only Unicode letters and digits
///
/// Absent and empty sequences are false.
pub fn is_alphanumeric(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        !s.is_empty() && s.chars().all(char::is_alphanumeric)
    })
}

/// Check whether a sequence contains only Unicode letters and the space character
///
/// Only `' '` is allowed, not general whitespace. An absent sequence is
/// false; an empty sequence is vacuously true.
///
/// ```text
/// is_alpha_space(None)          = false
/// is_alpha_space(Some(""))      = true
/// is_alpha_space(Some("  "))    = true
/// is_alpha_space(Some("a\nc"))  = false
/// is_alpha_space(Some("ab c"))  = true
/// is_alpha_space(Some("ab2c"))  = false
/// ```
pub fn is_alpha_space(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        s.chars().all(|ch| ch == ' ' || ch.is_alphabetic())
    })
}

/// Check whether a sequence contains only Unicode letters and whitespace
///
/// An absent sequence is false; an empty sequence is vacuously true.
pub fn is_alpha_whitespace(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        s.chars().all(|ch| ch.is_whitespace() || ch.is_alphabetic())
    })
}

/// Check whether a sequence contains only Unicode letters, digits, and spaces
///
/// An absent sequence is false; an empty sequence is vacuously true.
pub fn is_alphanumeric_space(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        s.chars().all(|ch| ch == ' ' || ch.is_alphanumeric())
    })
}

/// Check whether a sequence contains only Unicode numeric characters
///
/// Decimal points and signs are not numeric characters and disqualify the
/// sequence. Classification is Unicode-aware, so non-ASCII digits such as
/// `"\u{0967}\u{0968}\u{0969}"` qualify. Absent and empty sequences are
/// false.
///
/// ```text
/// is_numeric(None)           = false
/// is_numeric(Some(""))       = false
/// is_numeric(Some("123"))    = true
/// is_numeric(Some("12 3"))   = false
/// is_numeric(Some("12.3"))   = false
/// is_numeric(Some("-123"))   = false
/// is_numeric(Some("+123"))   = false
/// ```
pub fn is_numeric(input: Option<&str>) -> bool {
    input.map_or(false, |s| !s.is_empty() && s.chars().all(char::is_numeric))
}

/// Check whether a sequence contains only Unicode numeric characters and spaces
///
/// An absent sequence is false; an empty sequence is vacuously true.
pub fn is_numeric_space(input: Option<&str>) -> bool {
    input.map_or(false, |s| s.chars().all(|ch| ch == ' ' || ch.is_numeric()))
}

/// Check whether a sequence contains only Unicode numeric characters and whitespace
///
/// An absent sequence is false; an empty sequence is vacuously true.
pub fn is_numeric_whitespace(input: Option<&str>) -> bool {
    input.map_or(false, |s| {
        s.chars().all(|ch| ch.is_whitespace() || ch.is_numeric())
    })
}

/// Check whether a sequence contains only whitespace
///
/// An absent sequence is false; an empty sequence is vacuously true. Compare
/// [`super::is_blank`], which is true for absent input.
pub fn is_whitespace(input: Option<&str>) -> bool {
    input.map_or(false, |s| s.chars().all(char::is_whitespace))
}

/// Check whether a sequence contains only printable ASCII characters
///
/// Printable means every code point lies in `[32, 126]` inclusive (see
/// [`chars::is_ascii_printable`]). An absent sequence is false; an empty
/// sequence is vacuously true.
///
/// ```text
/// is_ascii_printable(None)               = false
/// is_ascii_printable(Some(""))           = true
/// is_ascii_printable(Some("!ab-c~"))     = true
/// is_ascii_printable(Some("\u{7f}"))     = false
/// is_ascii_printable(Some("Ceki Gülcü")) = false
/// ```
pub fn is_ascii_printable(input: Option<&str>) -> bool {
    input.map_or(false, |s| s.chars().all(chars::is_ascii_printable))
}
