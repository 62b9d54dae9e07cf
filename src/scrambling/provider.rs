//! Fake-data provider abstraction.
//!
//! A provider synthesizes one well-formed replacement value per call. The
//! scrambler owns its provider exclusively for the whole session, so
//! implementations are free to keep mutable state such as an RNG.

use thiserror::Error;

use crate::domain::Category;

/// Failure to synthesize a replacement value.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Provider produced nothing usable
    #[error("provider returned an empty {category} value")]
    Empty { category: Category },

    /// Provider cannot produce this category in its configuration
    #[error("provider cannot generate {category}: {reason}")]
    Unsupported { category: Category, reason: String },

    #[error("{0}")]
    Other(String),
}

pub type GenerationResult = Result<String, GenerationError>;

/// Source of synthetic values, one method per category.
pub trait FakeDataProvider: Send {
    fn phone_number(&mut self) -> GenerationResult;

    fn credit_card_number(&mut self) -> GenerationResult;

    fn email(&mut self) -> GenerationResult;

    fn ipv4(&mut self) -> GenerationResult;

    /// Human-readable description used in diagnostics.
    fn name(&self) -> &str;
}

/// Generator bound to a category once, when the pattern table is built.
pub type Generator = fn(&mut dyn FakeDataProvider) -> GenerationResult;

fn generate_phone_number(provider: &mut dyn FakeDataProvider) -> GenerationResult {
    provider.phone_number()
}

fn generate_credit_card(provider: &mut dyn FakeDataProvider) -> GenerationResult {
    provider.credit_card_number()
}

fn generate_email(provider: &mut dyn FakeDataProvider) -> GenerationResult {
    provider.email()
}

fn generate_ipv4(provider: &mut dyn FakeDataProvider) -> GenerationResult {
    provider.ipv4()
}

/// Returns the provider method that synthesizes values for `category`.
pub fn generator_for(category: Category) -> Generator {
    match category {
        Category::PhoneNumber => generate_phone_number,
        Category::CreditCard => generate_credit_card,
        Category::Email => generate_email,
        Category::IpAddress => generate_ipv4,
    }
}
