//! Credit card number detection.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern source for card numbers: Visa, MasterCard, Discover, Amex,
/// Diners Club and JCB issuer prefixes with their total lengths.
pub const CREDIT_CARD_PATTERN: &str = r"(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9]{2})[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35\d{3})\d{11})";

/// Credit card number matcher.
///
/// Only unseparated digit runs are recognized; `4111 1111 1111 1111`
/// is not a card number to this matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardMatcher;

impl CreditCardMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(CREDIT_CARD_PATTERN).expect("Valid credit card regex"));
        &PATTERN
    }
}

impl PatternMatcher for CreditCardMatcher {
    fn category(&self) -> Category {
        Category::CreditCard
    }

    fn source(&self) -> &'static str {
        CREDIT_CARD_PATTERN
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
