//! IPv4 address detection.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern source for dotted-quad addresses; each octet is 0-255.
pub const IPV4_PATTERN: &str =
    r"((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// IPv4 address matcher.
///
/// The pattern is not anchored, so a dotted run with a too-large leading
/// octet can still match from a later digit (`256.1.1.1` yields
/// `56.1.1.1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4Matcher;

impl Ipv4Matcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(IPV4_PATTERN).expect("Valid IPv4 regex"));
        &PATTERN
    }
}

impl PatternMatcher for Ipv4Matcher {
    fn category(&self) -> Category {
        Category::IpAddress
    }

    fn source(&self) -> &'static str {
        IPV4_PATTERN
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
