//! Error types for the scrambler.
//!
//! Only [`ScramblerError::Configuration`] ever crosses the library boundary
//! as a hard failure. The other variants describe degraded work inside a
//! transform; they are handed to the session's observer and the affected
//! text is left as it was.

use std::fmt;

use crate::domain::Category;
use crate::scrambling::GenerationError;

/// Result type alias for scrambler operations.
pub type ScramblerResult<T> = Result<T, ScramblerError>;

/// Error type for all scrambling operations.
#[derive(Debug)]
pub enum ScramblerError {
    /// Invalid configuration, e.g. a locale the fake-data provider lacks
    Configuration { parameter: String, reason: String },

    /// Category name outside the fixed enumeration
    UnknownCategory { name: String },

    /// Pattern for a category could not be compiled or executed
    PatternExecution {
        category: Category,
        pattern: String,
        reason: String,
    },

    /// Provider failed to produce a value for one match
    ValueGeneration {
        category: Category,
        matched: String,
        source: GenerationError,
    },
}

impl ScramblerError {
    /// Returns true for errors that abort construction of a scrambler.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

impl fmt::Display for ScramblerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { parameter, reason } => {
                write!(f, "Configuration error for '{}': {}", parameter, reason)
            }
            Self::UnknownCategory { name } => {
                write!(f, "Unknown pattern name: {}. Skipping.", name)
            }
            Self::PatternExecution {
                category,
                pattern,
                reason,
            } => {
                write!(
                    f,
                    "Error in regular expression for {} ('{}'): {}",
                    category, pattern, reason
                )
            }
            Self::ValueGeneration {
                category, source, ..
            } => {
                write!(f, "Error generating fake value for {}: {}", category, source)
            }
        }
    }
}

impl std::error::Error for ScramblerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ValueGeneration { source, .. } => Some(source),
            _ => None,
        }
    }
}
