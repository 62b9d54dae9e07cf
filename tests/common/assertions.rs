//! Custom assertions for scrambled text.

use pii_scrambler::Category;

/// Asserts that `original` no longer appears in `output`.
///
/// # Panics
/// Panics if the value is still present.
pub fn assert_scrambled(output: &str, original: &str) {
    assert!(
        !output.contains(original),
        "'{}' should be scrambled but was found in output: {:?}",
        original,
        output
    );
}

/// Asserts that `expected` is still present in `output`.
///
/// # Panics
/// Panics if the value is missing.
pub fn assert_preserved(output: &str, expected: &str) {
    assert!(
        output.contains(expected),
        "'{}' should be preserved but was not found in output: {:?}",
        expected,
        output
    );
}

/// Asserts that `value` is recognized by the category's pattern.
///
/// # Panics
/// Panics if the category's matcher finds nothing in `value`.
pub fn assert_well_formed(category: Category, value: &str) {
    assert!(
        category.matcher().is_match(value),
        "{:?} should be a well-formed {} value",
        value,
        category
    );
}

/// Asserts that `output` is `prefix`, some replacement, then `suffix`, and
/// returns the replacement.
///
/// # Panics
/// Panics if the surrounding text was altered.
pub fn replaced_between<'a>(output: &'a str, prefix: &str, suffix: &str) -> &'a str {
    assert!(
        output.len() >= prefix.len() + suffix.len()
            && output.starts_with(prefix)
            && output.ends_with(suffix),
        "expected {:?} ... {:?}, got {:?}",
        prefix,
        suffix,
        output
    );
    &output[prefix.len()..output.len() - suffix.len()]
}
