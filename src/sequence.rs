//! General sequence search
//!
//! Substring search over character positions with an arbitrary start offset.
//! Indices here count `char`s (Unicode scalar values), not bytes, so a match
//! inside multi-byte text reports the position a caller iterating `chars()`
//! would observe.

/// Index value returned when a search finds nothing
pub const INDEX_NOT_FOUND: isize = -1;

/// Find the first occurrence of `target` in `input` at or after `from_index`
///
/// `from_index` is a char position; a negative start is treated as 0. An empty
/// `target` matches at the first valid position at or after the start, i.e. at
/// `min(from_index, length)` — the empty sequence is a substring of everything.
/// Returns [`INDEX_NOT_FOUND`] when there is no match.
///
/// # Arguments
/// * `input` - Sequence to search in
/// * `target` - Sequence to search for
/// * `from_index` - Char position to start searching from
///
/// # Example
/// ```rust,ignore
/// assert_eq!(index_of("aabaabaa", "ab", 0), 1);
/// assert_eq!(index_of("aabaabaa", "ab", 2), 4);
/// assert_eq!(index_of("aabaabaa", "", 3), 3);
/// assert_eq!(index_of("aabaabaa", "zz", 0), INDEX_NOT_FOUND);
/// ```
pub fn index_of(input: &str, target: &str, from_index: isize) -> isize {
    let start = from_index.max(0) as usize;
    let length = input.chars().count();

    if target.is_empty() {
        return start.min(length) as isize;
    }
    if start >= length {
        return INDEX_NOT_FOUND;
    }

    // Map the char-position start to a byte offset, search, then map the byte
    // offset of the hit back to a char position.
    let byte_start = input
        .char_indices()
        .nth(start)
        .map_or(input.len(), |(offset, _)| offset);

    match input[byte_start..].find(target) {
        Some(relative) => {
            let match_offset = byte_start + relative;
            input[..match_offset].chars().count() as isize
        }
        None => INDEX_NOT_FOUND,
    }
}
