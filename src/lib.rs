//! Replace sensitive data in free text with realistic fake values.
//!
//! This library scans text for phone numbers, credit card numbers, email
//! addresses and IPv4 addresses, and substitutes every match with a
//! freshly generated value of the same kind. The matching is
//! pattern-based; it does not try to preserve anything about the
//! original value.
//!
//! # Architecture
//!
//! - [`domain`]: The [`Category`] set and one pattern matcher per category
//! - [`scrambling`]: Pattern table, fake-data providers, observers and the
//!   [`Scrambler`] itself
//! - [`error`]: Error handling
//!
//! # Quick Start
//!
//! ```
//! use pii_scrambler::Scrambler;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scrambler = Scrambler::new("en_US")?;
//! let text = "Call me at 555-123-4567 or email jane@example.com";
//! let scrambled = scrambler.transform(text, None);
//!
//! assert!(!scrambled.contains("jane@example.com"));
//! assert!(scrambled.starts_with("Call me at "));
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Selected categories
//!
//! Names outside the category set are logged and skipped.
//!
//! ```
//! use pii_scrambler::Scrambler;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scrambler = Scrambler::new("en_US")?;
//! let outcome = scrambler.scramble("card 4111111111111111", Some(&["credit_card", "ssn"]));
//!
//! assert!(!outcome.text.contains("4111111111111111"));
//! assert_eq!(outcome.report.categories_skipped, vec!["ssn".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern Matching
//!
//! ```
//! use pii_scrambler::domain::{Ipv4Matcher, PatternMatcher};
//!
//! let matcher = Ipv4Matcher::new();
//! assert_eq!(matcher.extract_all("gw 10.0.0.1, bad 999.999.999.999"), vec!["10.0.0.1"]);
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod scrambling;

// Re-exports for convenient access
pub use domain::{
    Category, CreditCardMatcher, EmailMatcher, Ipv4Matcher, PatternMatcher, PhoneNumberMatcher,
};
pub use error::{ScramblerError, ScramblerResult};
pub use scrambling::{
    FakeDataProvider, FakerProvider, GenerationError, GenerationResult, Locale, PatternTable,
    ScrambleObserver, ScrambleOutcome, ScrambleReport, Scrambler, ScramblerConfig,
    SilentObserver, TracingObserver,
};
