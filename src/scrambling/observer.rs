//! Diagnostic observers.
//!
//! Scramblers never configure logging themselves; they report through an
//! injected [`ScrambleObserver`]. The default forwards to `tracing`, so
//! output goes wherever the application's subscriber sends it.

use tracing::{debug, error, warn};

use crate::domain::Category;
use crate::error::ScramblerError;

/// Receiver for non-fatal diagnostics raised while scrambling.
pub trait ScrambleObserver: Send + Sync {
    /// Called for an unknown category, a failed pattern, or a failed value
    /// generation. The affected text is left unchanged.
    fn diagnostic(&self, error: &ScramblerError);

    /// Called after a category has been applied to the text.
    fn category_applied(&self, _category: Category, _replaced: usize) {}
}

/// Observer that emits diagnostics as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScrambleObserver for TracingObserver {
    fn diagnostic(&self, err: &ScramblerError) {
        match err {
            ScramblerError::UnknownCategory { name } => {
                warn!(category = %name, "{}", err);
            }
            ScramblerError::PatternExecution { category, .. }
            | ScramblerError::ValueGeneration { category, .. } => {
                error!(category = %category, "{}", err);
            }
            ScramblerError::Configuration { .. } => {
                error!("{}", err);
            }
        }
    }

    fn category_applied(&self, category: Category, replaced: usize) {
        debug!(category = %category, replaced, "Applied pattern");
    }
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ScrambleObserver for SilentObserver {
    fn diagnostic(&self, _error: &ScramblerError) {}
}
