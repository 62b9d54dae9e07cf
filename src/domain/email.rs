//! Email address detection.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Email address matcher: local part, `@`, domain, and a TLD of at
/// least two letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Valid email regex"));
        &PATTERN
    }
}

impl PatternMatcher for EmailMatcher {
    fn category(&self) -> Category {
        Category::Email
    }

    fn source(&self) -> &'static str {
        EMAIL_PATTERN
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
