//! Test fixtures: providers and observers with predictable behavior.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use pii_scrambler::{
    Category, FakeDataProvider, GenerationError, GenerationResult, ScrambleObserver, Scrambler,
    ScramblerError,
};

pub const STUB_PHONE: &str = "(800) 555-0199";
pub const STUB_CARD: &str = "5500000000000004";
pub const STUB_EMAIL: &str = "user@example.org";
pub const STUB_IP: &str = "10.0.0.1";

/// Provider that returns one fixed, well-formed value per category.
#[derive(Debug, Default)]
pub struct StubProvider;

impl FakeDataProvider for StubProvider {
    fn phone_number(&mut self) -> GenerationResult {
        Ok(STUB_PHONE.to_string())
    }

    fn credit_card_number(&mut self) -> GenerationResult {
        Ok(STUB_CARD.to_string())
    }

    fn email(&mut self) -> GenerationResult {
        Ok(STUB_EMAIL.to_string())
    }

    fn ipv4(&mut self) -> GenerationResult {
        Ok(STUB_IP.to_string())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Provider that fails for selected categories and otherwise acts like
/// [`StubProvider`].
#[derive(Debug, Default)]
pub struct FailingProvider {
    failing: HashSet<Category>,
}

impl FailingProvider {
    pub fn failing(categories: &[Category]) -> Self {
        Self {
            failing: categories.iter().copied().collect(),
        }
    }

    fn produce(&self, category: Category, value: &str) -> GenerationResult {
        if self.failing.contains(&category) {
            return Err(GenerationError::Unsupported {
                category,
                reason: "disabled for test".to_string(),
            });
        }
        Ok(value.to_string())
    }
}

impl FakeDataProvider for FailingProvider {
    fn phone_number(&mut self) -> GenerationResult {
        self.produce(Category::PhoneNumber, STUB_PHONE)
    }

    fn credit_card_number(&mut self) -> GenerationResult {
        self.produce(Category::CreditCard, STUB_CARD)
    }

    fn email(&mut self) -> GenerationResult {
        self.produce(Category::Email, STUB_EMAIL)
    }

    fn ipv4(&mut self) -> GenerationResult {
        self.produce(Category::IpAddress, STUB_IP)
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Provider whose values count up, so each replacement is distinct.
#[derive(Debug, Default)]
pub struct CountingProvider {
    next: u32,
}

impl CountingProvider {
    fn bump(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

impl FakeDataProvider for CountingProvider {
    fn phone_number(&mut self) -> GenerationResult {
        let n = self.bump();
        Ok(format!("800-555-{:04}", n))
    }

    fn credit_card_number(&mut self) -> GenerationResult {
        let n = self.bump();
        Ok(format!("4{:015}", n))
    }

    fn email(&mut self) -> GenerationResult {
        let n = self.bump();
        Ok(format!("user{}@example.org", n))
    }

    fn ipv4(&mut self) -> GenerationResult {
        let n = self.bump();
        Ok(format!("10.0.0.{}", n % 256))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Kind of diagnostic seen by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    UnknownCategory(String),
    PatternFailed(Category),
    GenerationFailed(Category),
    Other(String),
}

/// Observer that keeps every diagnostic for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    diagnostics: Mutex<Vec<(Recorded, String)>>,
    applied: Mutex<Vec<(Category, usize)>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn kinds(&self) -> Vec<Recorded> {
        self.diagnostics
            .lock()
            .unwrap()
            .iter()
            .map(|(kind, _)| kind.clone())
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn applied(&self) -> Vec<(Category, usize)> {
        self.applied.lock().unwrap().clone()
    }
}

impl ScrambleObserver for RecordingObserver {
    fn diagnostic(&self, error: &ScramblerError) {
        let kind = match error {
            ScramblerError::UnknownCategory { name } => Recorded::UnknownCategory(name.clone()),
            ScramblerError::PatternExecution { category, .. } => {
                Recorded::PatternFailed(*category)
            }
            ScramblerError::ValueGeneration { category, .. } => {
                Recorded::GenerationFailed(*category)
            }
            other => Recorded::Other(other.to_string()),
        };
        self.diagnostics
            .lock()
            .unwrap()
            .push((kind, error.to_string()));
    }

    fn category_applied(&self, category: Category, replaced: usize) {
        self.applied.lock().unwrap().push((category, replaced));
    }
}

/// Scrambler over [`StubProvider`] reporting to a fresh recorder.
pub fn stub_scrambler() -> (Scrambler, Arc<RecordingObserver>) {
    let observer = RecordingObserver::new();
    let scrambler =
        Scrambler::with_provider(Box::new(StubProvider)).with_observer(observer.clone());
    (scrambler, observer)
}

/// One typical sample per category.
pub fn category_samples() -> Vec<(Category, &'static str, &'static str)> {
    vec![
        (Category::PhoneNumber, "call 555-123-4567 today", "555-123-4567"),
        (Category::CreditCard, "card: 4111111111111111.", "4111111111111111"),
        (Category::Email, "mail jane@example.com now", "jane@example.com"),
        (Category::IpAddress, "host 192.168.1.20 is up", "192.168.1.20"),
    ]
}
