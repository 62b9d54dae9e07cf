//! The closed set of sensitive-data categories.

use std::fmt;
use std::str::FromStr;

use super::{CreditCardMatcher, EmailMatcher, Ipv4Matcher, PatternMatcher, PhoneNumberMatcher};
use crate::error::ScramblerError;

/// A class of sensitive data recognized in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    PhoneNumber,
    CreditCard,
    Email,
    IpAddress,
}

impl Category {
    /// Every category, in the order applied when the caller names none.
    pub const ALL: [Category; 4] = [
        Category::PhoneNumber,
        Category::CreditCard,
        Category::Email,
        Category::IpAddress,
    ];

    /// Name used on the command line and in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhoneNumber => "phone_number",
            Self::CreditCard => "credit_card",
            Self::Email => "email",
            Self::IpAddress => "ip_address",
        }
    }

    /// Comma-separated list of every valid name.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the built-in matcher for this category.
    pub fn matcher(&self) -> &'static dyn PatternMatcher {
        match self {
            Self::PhoneNumber => &PhoneNumberMatcher,
            Self::CreditCard => &CreditCardMatcher,
            Self::Email => &EmailMatcher,
            Self::IpAddress => &Ipv4Matcher,
        }
    }

    /// Source text of the built-in pattern.
    pub fn default_pattern(&self) -> &'static str {
        self.matcher().source()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScramblerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ScramblerError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
