//! Unified error type for the domain layer
//!
//! Domain operations never touch storage, so the only failures here are
//! rejected inputs and rejected state transitions.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., incomplete character draft)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for rejected input.
    ///
    /// # Example
    /// ```ignore
    /// if self.tools.is_empty() {
    ///     return Err(DomainError::validation("at least one tool must be selected"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidStateTransition(_))
    }
}
