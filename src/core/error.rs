//! Error types for readings and calculations.

use thiserror::Error;

/// Result type for arcana operations.
pub type ArcanaResult<T> = Result<T, ArcanaError>;

/// Errors surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArcanaError {
    /// Missing, malformed or out-of-range birth date.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A delayed operation of the same widget is still running.
    #[error("{0} already in progress")]
    Busy(&'static str),

    /// Reading event not allowed in the current state.
    #[error("cannot {event} while reading is {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
}

impl ArcanaError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
