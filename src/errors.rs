//! Error types for print-call construction and sink writes.
//!
//! Argument-list violations (`PositionalAfterKeyword`, `RepeatedKeyword`) are
//! reported when the call is analyzed, before anything is written. `Sink`
//! errors carry the destination's description so a failed write names the
//! target it was aimed at.

use crate::args::Slot;
use thiserror::Error;

/// Unified error type for print operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// A plain value appeared after a keyword argument in the argument list.
    #[error("positional argument after keyword argument (argument {index})")]
    PositionalAfterKeyword { index: usize },

    /// The same keyword argument was supplied more than once.
    #[error("keyword argument repeated: {slot} (argument {index})")]
    RepeatedKeyword { slot: Slot, index: usize },

    /// The destination rejected a write or flush.
    #[error("write to {destination} failed: {message}")]
    Sink {
        destination: String,
        message: String,
    },
}

impl PrintError {
    /// Create a sink error from a destination description and an underlying cause.
    pub fn sink(destination: impl Into<String>, message: impl ToString) -> Self {
        Self::Sink {
            destination: destination.into(),
            message: message.to_string(),
        }
    }

    /// True for argument-list violations, false for destination failures.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::PositionalAfterKeyword { .. } | Self::RepeatedKeyword { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_violation() {
        let err = PrintError::PositionalAfterKeyword { index: 2 };
        assert_eq!(
            err.to_string(),
            "positional argument after keyword argument (argument 2)"
        );

        let err = PrintError::RepeatedKeyword {
            slot: Slot::Sep,
            index: 3,
        };
        assert_eq!(err.to_string(), "keyword argument repeated: sep (argument 3)");
    }

    #[test]
    fn test_sink_error_carries_destination() {
        let err = PrintError::sink("stdout", "broken pipe");
        assert_eq!(err.to_string(), "write to stdout failed: broken pipe");
        assert!(!err.is_argument_error());
    }
}
