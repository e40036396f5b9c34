use thiserror::Error;

use crate::state::key::AttributeKey;

/// Errors raised when resolving a shared state field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharedStateError {
    /// The field was first registered with another value type.
    #[error("Shared state field '{key}' holds {expected}, requested as {found}")]
    TypeMismatch {
        key: AttributeKey,
        expected: &'static str,
        found: &'static str,
    },
}
