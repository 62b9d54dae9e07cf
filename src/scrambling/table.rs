//! Category-to-pattern table.
//!
//! The table always holds exactly one entry per [`Category`]. Each entry
//! pairs a pattern with the generator for its category; both are fixed
//! when the table is built, so no name lookup happens per match.

use std::borrow::Cow;
use std::fmt;

use regex::{Regex, RegexBuilder};

use super::provider::{generator_for, Generator};
use crate::domain::Category;

/// Upper bound on the compiled size of a runtime-supplied pattern.
pub const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// One category's pattern and generator.
#[derive(Clone)]
pub struct PatternEntry {
    category: Category,
    source: Cow<'static, str>,
    compiled: Result<Regex, String>,
    generator: Generator,
}

impl PatternEntry {
    fn builtin(category: Category) -> Self {
        let matcher = category.matcher();
        Self {
            category,
            source: Cow::Borrowed(matcher.source()),
            compiled: Ok(matcher.pattern().clone()),
            generator: generator_for(category),
        }
    }

    fn custom(category: Category, source: &str) -> Self {
        let compiled = RegexBuilder::new(source)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| e.to_string());
        Self {
            category,
            source: Cow::Owned(source.to_string()),
            compiled,
            generator: generator_for(category),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled pattern, or the reason compilation failed.
    pub fn regex(&self) -> Result<&Regex, &str> {
        self.compiled.as_ref().map_err(String::as_str)
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("category", &self.category)
            .field("source", &self.source)
            .field("compiled", &self.compiled.is_ok())
            .finish()
    }
}

/// Mapping from every category to its pattern entry.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: [PatternEntry; 4],
}

impl PatternTable {
    /// Builds the table with the built-in pattern for every category.
    pub fn builtin() -> Self {
        Self {
            entries: Category::ALL.map(PatternEntry::builtin),
        }
    }

    /// Replaces one category's pattern.
    ///
    /// An invalid pattern is kept in the table; scrambling reports it and
    /// leaves that category's text unchanged.
    pub fn with_pattern(mut self, category: Category, source: &str) -> Self {
        self.entries[category as usize] = PatternEntry::custom(category, source);
        self
    }

    pub fn entry(&self, category: Category) -> &PatternEntry {
        &self.entries[category as usize]
    }

    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin()
    }
}
