//! Per-call scrambling statistics.

use crate::domain::Category;

/// Statistics about one scramble call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrambleReport {
    /// Pattern matches seen across all applied categories
    pub matches_found: usize,

    /// Matches replaced with a generated value
    pub values_replaced: usize,

    /// Matches left unchanged because generation failed
    pub generation_failures: usize,

    /// Categories whose pattern ran, in application order
    pub categories_applied: Vec<Category>,

    /// Requested names outside the category set
    pub categories_skipped: Vec<String>,

    /// Categories left untouched because their pattern failed
    pub patterns_failed: Vec<Category>,
}

impl ScrambleReport {
    pub fn has_replacements(&self) -> bool {
        self.values_replaced > 0
    }

    /// Returns true if any unit of work was degraded or skipped.
    pub fn is_degraded(&self) -> bool {
        self.generation_failures > 0
            || !self.categories_skipped.is_empty()
            || !self.patterns_failed.is_empty()
    }
}

/// Scrambled text together with its statistics.
#[derive(Debug, Clone)]
pub struct ScrambleOutcome {
    pub text: String,
    pub report: ScrambleReport,
}
