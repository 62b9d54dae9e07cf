//! Fake-data provider backed by the `fake` crate.

use std::fmt;
use std::str::FromStr;

use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::internet::raw::{FreeEmail, IPv4};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{Data, AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::provider::{FakeDataProvider, GenerationError, GenerationResult};
use crate::domain::Category;
use crate::error::{ScramblerError, ScramblerResult};

/// Locales the provider can generate values for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    FrFr,
    PtBr,
    ZhCn,
    ZhTw,
    JaJp,
    ArSa,
}

impl Locale {
    pub const ALL: [Locale; 7] = [
        Locale::En,
        Locale::FrFr,
        Locale::PtBr,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::JaJp,
        Locale::ArSa,
    ];

    /// Parses a locale identifier such as `en_US` or `fr-FR`.
    ///
    /// Matching ignores case and accepts `-` in place of `_`. A bare
    /// language code is accepted where only one region is supported.
    pub fn parse(name: &str) -> ScramblerResult<Self> {
        let normalized = name.trim().replace('-', "_").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en_us" => Ok(Self::En),
            "fr" | "fr_fr" => Ok(Self::FrFr),
            "pt_br" => Ok(Self::PtBr),
            "zh_cn" => Ok(Self::ZhCn),
            "zh_tw" => Ok(Self::ZhTw),
            "ja" | "ja_jp" => Ok(Self::JaJp),
            "ar" | "ar_sa" => Ok(Self::ArSa),
            _ => Err(ScramblerError::Configuration {
                parameter: "locale".to_string(),
                reason: format!(
                    "unsupported locale '{}' (supported: {})",
                    name,
                    Self::supported()
                ),
            }),
        }
    }

    /// Canonical identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::FrFr => "fr_FR",
            Self::PtBr => "pt_BR",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::JaJp => "ja_JP",
            Self::ArSa => "ar_SA",
        }
    }

    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(Locale::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ScramblerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn fake_value<L: Data + Copy>(locale: L, category: Category, rng: &mut StdRng) -> String {
    match category {
        Category::PhoneNumber => PhoneNumber(locale).fake_with_rng(rng),
        Category::CreditCard => CreditCardNumber(locale).fake_with_rng(rng),
        Category::Email => FreeEmail(locale).fake_with_rng(rng),
        Category::IpAddress => IPv4(locale).fake_with_rng(rng),
    }
}

/// Provider generating locale-aware values with the `fake` crate.
///
/// Values keep the locale's own formatting, so they do not always match
/// the category patterns on a later pass. `fr_FR` phone numbers come out
/// as five digit pairs (`05 31 74 62 14`), which the phone pattern never
/// matches. Card numbers, emails and IPv4 addresses from `en_US`, `fr_FR`,
/// `pt_BR`, `zh_CN` and `zh_TW` all match their patterns.
pub struct FakerProvider {
    locale: Locale,
    rng: StdRng,
    name: String,
}

impl FakerProvider {
    /// Creates a provider seeded from system entropy.
    pub fn new(locale: Locale) -> Self {
        Self::with_rng(locale, StdRng::from_entropy())
    }

    /// Creates a provider whose output is reproducible for a given seed.
    pub fn seeded(locale: Locale, seed: u64) -> Self {
        Self::with_rng(locale, StdRng::seed_from_u64(seed))
    }

    /// Creates a provider from a locale identifier.
    pub fn for_locale(name: &str) -> ScramblerResult<Self> {
        Ok(Self::new(Locale::parse(name)?))
    }

    fn with_rng(locale: Locale, rng: StdRng) -> Self {
        Self {
            locale,
            rng,
            name: format!("faker ({})", locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn generate(&mut self, category: Category) -> GenerationResult {
        let rng = &mut self.rng;
        let value = match self.locale {
            Locale::En => fake_value(EN, category, rng),
            Locale::FrFr => fake_value(FR_FR, category, rng),
            Locale::PtBr => fake_value(PT_BR, category, rng),
            Locale::ZhCn => fake_value(ZH_CN, category, rng),
            Locale::ZhTw => fake_value(ZH_TW, category, rng),
            Locale::JaJp => fake_value(JA_JP, category, rng),
            Locale::ArSa => fake_value(AR_SA, category, rng),
        };

        if value.trim().is_empty() {
            return Err(GenerationError::Empty { category });
        }
        Ok(value)
    }
}

impl fmt::Debug for FakerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakerProvider")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl FakeDataProvider for FakerProvider {
    fn phone_number(&mut self) -> GenerationResult {
        self.generate(Category::PhoneNumber)
    }

    fn credit_card_number(&mut self) -> GenerationResult {
        self.generate(Category::CreditCard)
    }

    fn email(&mut self) -> GenerationResult {
        self.generate(Category::Email)
    }

    fn ipv4(&mut self) -> GenerationResult {
        self.generate(Category::IpAddress)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
