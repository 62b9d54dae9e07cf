//! Phone number detection.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern source for phone numbers.
///
/// The last alternative accepts a bare 7-digit run, so part numbers and
/// similar numeric text are matched too.
pub const PHONE_NUMBER_PATTERN: &str =
    r"(\d{3}[-\.\s]??\d{3}[-\.\s]??\d{4}|\(\d{3}\)\s*\d{3}[-\.\s]??\d{4}|\d{3}[-\.\s]??\d{4})";

/// Phone number matcher.
///
/// Recognizes 10-digit numbers with optional `-`, `.` or whitespace
/// separators, a parenthesized area code, and 7-digit local numbers:
/// - 555-123-4567
/// - (555) 123-4567
/// - 555.123.4567
/// - 555 1234
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumberMatcher;

impl PhoneNumberMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(PHONE_NUMBER_PATTERN).expect("Valid phone number regex"));
        &PATTERN
    }
}

impl PatternMatcher for PhoneNumberMatcher {
    fn category(&self) -> Category {
        Category::PhoneNumber
    }

    fn source(&self) -> &'static str {
        PHONE_NUMBER_PATTERN
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
