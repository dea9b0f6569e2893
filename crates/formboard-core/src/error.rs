//! Error types for Formboard.
//!
//! The engine follows a fail-soft policy: an operation that references a
//! missing container or field, or that arrives in the wrong interaction
//! mode, leaves the state untouched. Internals still return these errors so
//! the store layer can trace them and tests can assert on the taxonomy, but
//! nothing here is ever surfaced to the user or escalated into a panic.

use crate::id::{ContainerId, FieldId};

/// Result type alias for Formboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in the form builder engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// A container id did not resolve to any known container.
    #[error("unknown container '{0}'")]
    UnknownContainer(ContainerId),

    /// A field id did not resolve to any container's contents.
    #[error("field '{0}' is not in any container")]
    UnknownField(FieldId),

    /// An index was outside the bounds of its container.
    #[error("index {index} is out of bounds for container '{container}' (length {len})")]
    IndexOutOfBounds {
        container: ContainerId,
        index: usize,
        len: usize,
    },

    /// An operation arrived while the engine was in a mode that forbids it.
    #[error("cannot {operation} while {mode}")]
    InvalidState {
        operation: &'static str,
        mode: &'static str,
    },
}

impl BoardError {
    /// Create an invalid-state error.
    pub fn invalid_state(operation: &'static str, mode: &'static str) -> Self {
        Self::InvalidState { operation, mode }
    }

    /// Returns `true` if this is a not-found error (unknown container, field,
    /// or index), as opposed to a wrong-mode error.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::InvalidState { .. })
    }
}
