//! Null-safe array helpers
//!
//! Small helpers over optional slices. An absent slice behaves exactly like an
//! empty one for length and emptiness purposes.

/// The shared empty byte slice, returned by the byte-encoding helpers for
/// absent input.
pub const EMPTY_BYTE_ARRAY: &[u8] = &[];

/// Check whether an optional slice is absent or has no elements
///
/// # Example
/// ```rust,ignore
/// assert!(is_empty::<&str>(None));
/// assert!(is_empty::<&str>(Some(&[])));
/// assert!(!is_empty(Some(&["a"])));
/// ```
pub fn is_empty<T>(array: Option<&[T]>) -> bool {
    array.map_or(true, |a| a.is_empty())
}

/// Check whether an optional slice is present and has at least one element
pub fn is_not_empty<T>(array: Option<&[T]>) -> bool {
    !is_empty(array)
}

/// Get the number of elements in an optional slice, 0 when absent
pub fn length<T>(array: Option<&[T]>) -> usize {
    array.map_or(0, <[T]>::len)
}
