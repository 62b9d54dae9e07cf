//! Pattern scrambling service.
//!
//! A [`Scrambler`] owns a [`PatternTable`], a [`FakeDataProvider`] and a
//! [`ScrambleObserver`] for the lifetime of one session. Categories are
//! applied one after another, each to the output of the previous one, and
//! every match is replaced by a freshly generated value.

pub mod faker;
pub mod observer;
pub mod provider;
pub mod report;
pub mod table;

pub use faker::{FakerProvider, Locale};
pub use observer::{ScrambleObserver, SilentObserver, TracingObserver};
pub use provider::{FakeDataProvider, GenerationError, GenerationResult, Generator};
pub use report::{ScrambleOutcome, ScrambleReport};
pub use table::{PatternEntry, PatternTable};

use std::sync::Arc;

use regex::Captures;

use crate::domain::Category;
use crate::error::{ScramblerError, ScramblerResult};

/// Settings for a scrambling session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScramblerConfig {
    /// Locale identifier handed to the fake-data provider
    pub locale: String,

    /// Seed for reproducible output; entropy when absent
    pub seed: Option<u64>,
}

impl Default for ScramblerConfig {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
            seed: None,
        }
    }
}

/// Replaces sensitive-data matches in text with synthetic values.
pub struct Scrambler {
    table: PatternTable,
    provider: Box<dyn FakeDataProvider>,
    observer: Arc<dyn ScrambleObserver>,
}

impl Scrambler {
    /// Creates a scrambler backed by the `fake` crate for `locale`.
    ///
    /// # Errors
    /// Returns [`ScramblerError::Configuration`] if the locale is not
    /// supported by the provider.
    pub fn new(locale: &str) -> ScramblerResult<Self> {
        Self::with_config(ScramblerConfig {
            locale: locale.to_string(),
            seed: None,
        })
    }

    pub fn with_config(config: ScramblerConfig) -> ScramblerResult<Self> {
        let locale = Locale::parse(&config.locale)?;
        let provider = match config.seed {
            Some(seed) => FakerProvider::seeded(locale, seed),
            None => FakerProvider::new(locale),
        };
        Ok(Self::with_provider(Box::new(provider)))
    }

    /// Creates a scrambler around a custom provider.
    pub fn with_provider(provider: Box<dyn FakeDataProvider>) -> Self {
        Self {
            table: PatternTable::builtin(),
            provider,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Routes diagnostics to `observer` instead of `tracing`.
    pub fn with_observer(mut self, observer: Arc<dyn ScrambleObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Overrides the pattern for one category.
    pub fn with_pattern(mut self, category: Category, source: &str) -> Self {
        self.table = self.table.with_pattern(category, source);
        self
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Scrambles `text` for the named categories, or all of them.
    ///
    /// Unknown names are reported to the observer and skipped. This never
    /// fails: any match whose replacement cannot be generated is left as
    /// it was.
    pub fn transform(&mut self, text: &str, categories: Option<&[&str]>) -> String {
        self.scramble(text, categories).text
    }

    /// Scrambles `text` for already-validated categories, in order.
    pub fn transform_categories(&mut self, text: &str, categories: &[Category]) -> String {
        let requested: Vec<_> = categories.iter().copied().map(Ok).collect();
        self.run(text, requested).text
    }

    /// Like [`transform`](Self::transform), also returning statistics.
    pub fn scramble(&mut self, text: &str, categories: Option<&[&str]>) -> ScrambleOutcome {
        let requested: Vec<Result<Category, ScramblerError>> = match categories {
            Some(names) => names.iter().map(|name| name.parse::<Category>()).collect(),
            None => Category::ALL.into_iter().map(Ok).collect(),
        };
        self.run(text, requested)
    }

    fn run(
        &mut self,
        text: &str,
        requested: Vec<Result<Category, ScramblerError>>,
    ) -> ScrambleOutcome {
        let mut report = ScrambleReport::default();
        let mut current = text.to_string();

        for item in requested {
            match item {
                Ok(category) => {
                    current = self.apply(category, current, &mut report);
                }
                Err(err) => {
                    if let ScramblerError::UnknownCategory { name } = &err {
                        report.categories_skipped.push(name.clone());
                    }
                    self.observer.diagnostic(&err);
                }
            }
        }

        ScrambleOutcome {
            text: current,
            report,
        }
    }

    /// Replaces every match of one category's pattern.
    fn apply(&mut self, category: Category, text: String, report: &mut ScrambleReport) -> String {
        let entry = self.table.entry(category);
        let regex = match entry.regex() {
            Ok(regex) => regex,
            Err(reason) => {
                self.observer.diagnostic(&ScramblerError::PatternExecution {
                    category,
                    pattern: entry.source().to_string(),
                    reason: reason.to_string(),
                });
                report.patterns_failed.push(category);
                return text;
            }
        };

        let generate = entry.generator();
        let provider = &mut self.provider;
        let observer = &self.observer;
        let mut found = 0;
        let mut replaced = 0;
        let mut failed = 0;

        let scrambled = regex
            .replace_all(&text, |caps: &Captures<'_>| {
                found += 1;
                let matched = &caps[0];
                match generate(provider.as_mut()) {
                    Ok(value) => {
                        replaced += 1;
                        value
                    }
                    Err(source) => {
                        failed += 1;
                        observer.diagnostic(&ScramblerError::ValueGeneration {
                            category,
                            matched: matched.to_string(),
                            source,
                        });
                        matched.to_string()
                    }
                }
            })
            .into_owned();

        report.matches_found += found;
        report.values_replaced += replaced;
        report.generation_failures += failed;
        report.categories_applied.push(category);
        self.observer.category_applied(category, replaced);

        scrambled
    }
}

impl std::fmt::Debug for Scrambler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scrambler")
            .field("table", &self.table)
            .field("provider", &self.provider.name())
            .finish_non_exhaustive()
    }
}
