//! Null-safe string operations
//!
//! Pure inspection helpers over optional character sequences, modeled on
//! Apache Commons Lang and Google Guava. Absence is a valid input: every
//! function documents its result for `None` and for `Some("")`, and the two
//! deliberately diverge in places (see [`is_alpha_space`]).
//!
//! Quantifiers such as [`is_all_empty`] take an optional slice of optional
//! sequences. An absent or zero-length slice is vacuously "all" true and
//! "any" false; a slice containing one `None` element counts one absent
//! sequence. The two call shapes are not interchangeable and the distinction
//! is part of the contract.

mod classify;

pub use classify::*;

use crate::error::{Error, Result};
use crate::{array, charset, sequence};
use encoding_rs::Encoding;
use std::borrow::Cow;

/// A single space character as a string
pub const SPACE: &str = " ";

/// The empty string `""`
pub const EMPTY: &str = "";

/// A line feed LF `"\n"`
pub const LF: &str = "\n";

/// A carriage return CR `"\r"`
pub const CR: &str = "\r";

pub use crate::sequence::INDEX_NOT_FOUND;

/// Get the length of an optional sequence in chars, 0 when absent
///
/// # Example
/// ```rust,ignore
/// assert_eq!(length(None), 0);
/// assert_eq!(length(Some("")), 0);
/// assert_eq!(length(Some("日本語")), 3);
/// ```
pub fn length(input: Option<&str>) -> usize {
    input.map_or(0, |s| s.chars().count())
}

/// Encode an optional string into bytes with an optional charset
///
/// An absent input yields the shared empty byte slice. An absent charset is
/// resolved to the default (UTF-8) through [`charset::to_charset`]. Encoding
/// to UTF-8 borrows the input without copying.
///
/// # Arguments
/// * `input` - String to encode, or `None` for empty bytes
/// * `cs` - Target charset, or `None` for the default charset
pub fn get_bytes<'a>(input: Option<&'a str>, cs: Option<&'static Encoding>) -> Cow<'a, [u8]> {
    match input {
        None => Cow::Borrowed(array::EMPTY_BYTE_ARRAY),
        Some(s) => {
            let (bytes, _, _) = charset::to_charset(cs).encode(s);
            bytes
        }
    }
}

/// Encode an optional string into bytes with an optional charset name
///
/// An absent input yields the shared empty byte slice without looking the
/// name up, so a bad name only fails once there is something to encode. An
/// unrecognized name fails with [`Error::UnsupportedEncoding`].
///
/// # Arguments
/// * `input` - String to encode, or `None` for empty bytes
/// * `charset_name` - Target charset name, or `None` for the default charset
pub fn get_bytes_named<'a>(
    input: Option<&'a str>,
    charset_name: Option<&str>,
) -> Result<Cow<'a, [u8]>> {
    let Some(s) = input else {
        return Ok(Cow::Borrowed(array::EMPTY_BYTE_ARRAY));
    };
    let name = charset::to_charset_name(charset_name);
    let encoding = Encoding::for_label(name.as_bytes()).ok_or_else(|| {
        log::debug!("encoding lookup failed for name {:?}", name);
        Error::unsupported_encoding(name)
    })?;
    let (bytes, _, _) = encoding.encode(s);
    Ok(bytes)
}

/// Encode an optional string into bytes with the default charset (UTF-8)
pub fn get_bytes_default(input: Option<&str>) -> Cow<'_, [u8]> {
    get_bytes(input, None)
}

/// Check whether an optional sequence is absent or empty
///
/// ```text
/// is_empty(None)            = true
/// is_empty(Some(""))        = true
/// is_empty(Some(" "))       = false
/// is_empty(Some("bob"))     = false
/// is_empty(Some("  bob  ")) = false
/// ```
pub fn is_empty(input: Option<&str>) -> bool {
    input.map_or(true, str::is_empty)
}

/// Check whether an optional sequence is present and non-empty
pub fn is_not_empty(input: Option<&str>) -> bool {
    !is_empty(input)
}

/// Check whether every sequence in an optional slice is absent or empty
///
/// An absent or zero-length slice is vacuously true.
///
/// ```text
/// is_all_empty(None)                              = true
/// is_all_empty(Some(&[]))                         = true
/// is_all_empty(Some(&[None, Some("")]))           = true
/// is_all_empty(Some(&[None, Some("foo")]))        = false
/// ```
pub fn is_all_empty(inputs: Option<&[Option<&str>]>) -> bool {
    if array::is_empty(inputs) {
        return true;
    }
    inputs.unwrap_or_default().iter().all(|input| is_empty(*input))
}

/// Check whether at least one sequence in an optional slice is absent or empty
///
/// An absent or zero-length slice is vacuously false. Note the asymmetry with
/// a one-element slice holding `None`:
///
/// ```text
/// is_any_empty(None)                  = false   (no elements at all)
/// is_any_empty(Some(&[None]))         = true    (one absent element)
/// is_any_empty(Some(&[Some("foo")]))  = false
/// is_any_empty(Some(&[Some("")]))     = true
/// ```
pub fn is_any_empty(inputs: Option<&[Option<&str>]>) -> bool {
    if array::is_empty(inputs) {
        return false;
    }
    inputs.unwrap_or_default().iter().any(|input| is_empty(*input))
}

/// Check whether no sequence in an optional slice is absent or empty
pub fn is_none_empty(inputs: Option<&[Option<&str>]>) -> bool {
    !is_any_empty(inputs)
}

/// Check whether an optional sequence is absent, empty, or all whitespace
///
/// Whitespace is the Unicode definition used by [`char::is_whitespace`].
///
/// ```text
/// is_blank(None)            = true
/// is_blank(Some(""))        = true
/// is_blank(Some(" "))       = true
/// is_blank(Some("bob"))     = false
/// is_blank(Some("  bob  ")) = false
/// ```
pub fn is_blank(input: Option<&str>) -> bool {
    input.map_or(true, |s| s.chars().all(char::is_whitespace))
}

/// Check whether an optional sequence is present, non-empty, and not all whitespace
pub fn is_not_blank(input: Option<&str>) -> bool {
    !is_blank(input)
}

/// Check whether every sequence in an optional slice is blank
///
/// An absent or zero-length slice is vacuously true.
pub fn is_all_blank(inputs: Option<&[Option<&str>]>) -> bool {
    if array::is_empty(inputs) {
        return true;
    }
    inputs.unwrap_or_default().iter().all(|input| is_blank(*input))
}

/// Check whether at least one sequence in an optional slice is blank
///
/// An absent or zero-length slice is vacuously false; a one-element slice
/// holding `None` is true (same asymmetry as [`is_any_empty`]).
pub fn is_any_blank(inputs: Option<&[Option<&str>]>) -> bool {
    if array::is_empty(inputs) {
        return false;
    }
    inputs.unwrap_or_default().iter().any(|input| is_blank(*input))
}

/// Check whether no sequence in an optional slice is blank
pub fn is_none_blank(inputs: Option<&[Option<&str>]>) -> bool {
    !is_any_blank(inputs)
}

/// Find the first occurrence of `target` in `input`
///
/// Indices count chars. Returns [`INDEX_NOT_FOUND`] when either side is
/// absent or there is no match; an empty target matches at position 0.
///
/// ```text
/// index_of(None, Some("x"))              = -1
/// index_of(Some("x"), None)              = -1
/// index_of(Some(""), Some(""))           = 0
/// index_of(Some(""), Some("x"))          = -1
/// index_of(Some("aabaabaa"), Some("ab")) = 1
/// index_of(Some("aabaabaa"), Some(""))   = 0
/// ```
pub fn index_of(input: Option<&str>, target: Option<&str>) -> isize {
    index_of_from(input, target, 0)
}

/// Find the first occurrence of `target` in `input` at or after `from_index`
///
/// Same null semantics as [`index_of`]; the scan itself is delegated to
/// [`sequence::index_of`].
pub fn index_of_from(input: Option<&str>, target: Option<&str>, from_index: isize) -> isize {
    match (input, target) {
        (Some(input), Some(target)) => sequence::index_of(input, target, from_index),
        _ => INDEX_NOT_FOUND,
    }
}
