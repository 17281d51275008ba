//! Substring search contract, including the -1 sentinel and empty-needle rules

use aide::{sequence, string, INDEX_NOT_FOUND};

#[test]
fn test_sentinel_value() {
    assert_eq!(INDEX_NOT_FOUND, -1);
    assert_eq!(string::INDEX_NOT_FOUND, -1);
    assert_eq!(sequence::INDEX_NOT_FOUND, -1);
}

#[test]
fn test_index_of_null_semantics() {
    assert_eq!(string::index_of(None, Some("x")), INDEX_NOT_FOUND);
    assert_eq!(string::index_of(Some("x"), None), INDEX_NOT_FOUND);
    assert_eq!(string::index_of(None, None), INDEX_NOT_FOUND);
    assert_eq!(string::index_of_from(None, Some(""), 0), INDEX_NOT_FOUND);
}

#[test]
fn test_index_of_empty_edge_cases() {
    assert_eq!(string::index_of(Some(""), Some("")), 0);
    assert_eq!(string::index_of(Some(""), Some("x")), INDEX_NOT_FOUND);
    assert_eq!(string::index_of(Some("aabaabaa"), Some("")), 0);
    assert_eq!(string::index_of_from(Some("aabaabaa"), Some(""), 3), 3);
    // Start past the end clamps for the empty needle
    assert_eq!(string::index_of_from(Some("abc"), Some(""), 9), 3);
}

#[test]
fn test_index_of_basic_scan() {
    assert_eq!(string::index_of(Some("aabaabaa"), Some("a")), 0);
    assert_eq!(string::index_of(Some("aabaabaa"), Some("b")), 2);
    assert_eq!(string::index_of(Some("aabaabaa"), Some("ab")), 1);
    assert_eq!(string::index_of(Some("aabaabaa"), Some("zz")), INDEX_NOT_FOUND);
}

#[test]
fn test_index_of_with_start_offset() {
    assert_eq!(string::index_of_from(Some("aabaabaa"), Some("b"), 3), 5);
    assert_eq!(string::index_of_from(Some("aabaabaa"), Some("ab"), 2), 4);
    // Negative start behaves like 0
    assert_eq!(string::index_of_from(Some("aabaabaa"), Some("ab"), -7), 1);
    // Non-empty needle at or past the end never matches
    assert_eq!(
        string::index_of_from(Some("aabaabaa"), Some("a"), 8),
        INDEX_NOT_FOUND
    );
}

#[test]
fn test_index_of_reports_char_positions() {
    assert_eq!(string::index_of(Some("éléphant"), Some("phant")), 3);
    assert_eq!(string::index_of(Some("日本語abc"), Some("abc")), 3);
    assert_eq!(string::index_of_from(Some("日本語abc"), Some("abc"), 4), INDEX_NOT_FOUND);
}
