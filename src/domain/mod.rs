//! Domain models for sensitive-data detection.
//!
//! This module holds the closed [`Category`] enumeration and one matcher
//! per category. Matchers are plain unit structs whose compiled patterns
//! are cached for the life of the process.

pub mod card;
pub mod category;
pub mod email;
pub mod ip;
pub mod phone;

pub use card::CreditCardMatcher;
pub use category::Category;
pub use email::EmailMatcher;
pub use ip::Ipv4Matcher;
pub use phone::PhoneNumberMatcher;

use regex::Regex;

/// Trait for category pattern matchers.
pub trait PatternMatcher: Send + Sync {
    /// Category this matcher recognizes.
    fn category(&self) -> Category;

    /// Source text of the pattern.
    fn source(&self) -> &'static str;

    /// Compiled pattern.
    fn pattern(&self) -> &Regex;

    /// All non-overlapping matches, left to right.
    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    fn is_match(&self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}
