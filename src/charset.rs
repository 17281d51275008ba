//! Charset resolution helpers
//!
//! Resolves an optional charset handle or charset name to a concrete encoding,
//! substituting the default charset when none is supplied. Rust strings are
//! UTF-8 by definition, so UTF-8 plays the role of the platform default.
//! Name lookup goes through the WHATWG encoding label registry (`encoding_rs`),
//! which accepts the common aliases ("utf-8", "UTF-8", "latin1", ...).

use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_8};

/// Resolve an optional charset handle, defaulting to UTF-8
///
/// # Arguments
/// * `charset` - Charset handle, or `None` for the default charset
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_charset(None), UTF_8);
/// assert_eq!(to_charset(Some(WINDOWS_1252)), WINDOWS_1252);
/// ```
pub fn to_charset(charset: Option<&'static Encoding>) -> &'static Encoding {
    charset.unwrap_or(UTF_8)
}

/// Resolve an optional charset name to a concrete encoding
///
/// An absent name resolves to UTF-8. A present name is looked up in the
/// WHATWG label registry and fails with [`Error::UnsupportedCharset`] when it
/// is not a known label.
///
/// # Arguments
/// * `name` - Charset name, or `None` for the default charset
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_charset_from_name(Some("utf-8"))?, UTF_8);
/// assert!(to_charset_from_name(Some("no-such-charset")).is_err());
/// ```
pub fn to_charset_from_name(name: Option<&str>) -> Result<&'static Encoding> {
    match name {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.as_bytes()).ok_or_else(|| {
            log::debug!("charset lookup failed for label {:?}", label);
            Error::unsupported_charset(label)
        }),
    }
}

/// Resolve an optional charset name to a name
///
/// An absent name resolves to the default charset's canonical name
/// (`"UTF-8"`). A present name is returned verbatim with no validation, so an
/// unrecognized name passes through unchanged.
///
/// # Arguments
/// * `name` - Charset name, or `None` for the default charset name
pub fn to_charset_name(name: Option<&str>) -> &str {
    match name {
        None => UTF_8.name(),
        Some(n) => n,
    }
}
