//! Truth-table contract for the classifier family
//!
//! Every classifier documents its result for `None` and `Some("")`; this file
//! pins those tables, including the places where absence and emptiness
//! deliberately diverge.

use aide::string;

#[test]
fn test_absent_and_empty_agree_for_content_checks() {
    // Positive-content checks: false for both None and ""
    for input in [None, Some("")] {
        assert!(!string::is_all_lower_case(input));
        assert!(!string::is_any_lower_case(input));
        assert!(!string::is_all_upper_case(input));
        assert!(!string::is_any_upper_case(input));
        assert!(!string::is_mixed_case(input));
        assert!(!string::is_alpha(input));
        assert!(!string::is_alphanumeric(input));
        assert!(!string::is_numeric(input));
    }
    // Negated variants: true for both
    for input in [None, Some("")] {
        assert!(string::is_none_lower_case(input));
        assert!(string::is_none_upper_case(input));
    }
}

#[test]
fn test_absent_and_empty_diverge_for_exclusion_checks() {
    // None is false, "" is vacuously true
    assert!(!string::is_alpha_space(None));
    assert!(string::is_alpha_space(Some("")));

    assert!(!string::is_alpha_whitespace(None));
    assert!(string::is_alpha_whitespace(Some("")));

    assert!(!string::is_alphanumeric_space(None));
    assert!(string::is_alphanumeric_space(Some("")));

    assert!(!string::is_numeric_space(None));
    assert!(string::is_numeric_space(Some("")));

    assert!(!string::is_numeric_whitespace(None));
    assert!(string::is_numeric_whitespace(Some("")));

    assert!(!string::is_whitespace(None));
    assert!(string::is_whitespace(Some("")));

    assert!(!string::is_ascii_printable(None));
    assert!(string::is_ascii_printable(Some("")));
}

#[test]
fn test_negations_are_exact_complements() {
    let samples = [
        None,
        Some(""),
        Some(" "),
        Some("bob"),
        Some("  bob  "),
        Some("日本語"),
    ];
    for input in samples {
        assert_eq!(string::is_empty(input), !string::is_not_empty(input));
        assert_eq!(string::is_blank(input), !string::is_not_blank(input));
    }
}

#[test]
fn test_length_counts_chars() {
    assert_eq!(string::length(None), 0);
    assert_eq!(string::length(Some("")), 0);
    assert_eq!(string::length(Some("bob")), 3);
    // Char count, not byte count
    assert_eq!(string::length(Some("日本語")), 3);
    assert_eq!(string::length(Some("Gülcü")), 5);
}

#[test]
fn test_ascii_printable_boundaries() {
    assert!(!string::is_ascii_printable(Some("\u{1f}"))); // 31
    assert!(string::is_ascii_printable(Some("\u{20}"))); // 32
    assert!(string::is_ascii_printable(Some("\u{7e}"))); // 126
    assert!(!string::is_ascii_printable(Some("\u{7f}"))); // 127
}

#[test]
fn test_unicode_digit_classification() {
    // Devanagari digits qualify: classification is Unicode-aware
    assert!(string::is_numeric(Some("\u{0967}\u{0968}\u{0969}")));
    assert!(string::is_numeric_space(Some("\u{0967}\u{0968} \u{0969}")));
}

#[test]
fn test_mixed_case_needs_two_chars() {
    assert!(!string::is_mixed_case(Some("a")));
    assert!(!string::is_mixed_case(Some("A")));
    assert!(string::is_mixed_case(Some("aB")));
}

#[test]
fn test_classifiers_never_overlap_on_mixed_content() {
    assert!(!string::is_all_upper_case(Some("A1C")));
    assert!(!string::is_numeric(Some("A1C")));
    assert!(!string::is_alpha(Some("A1C")));
    assert!(string::is_alphanumeric(Some("A1C")));
}
