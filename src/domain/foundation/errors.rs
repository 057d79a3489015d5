//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when static domain data is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("'{parent}' has no {children}")]
    MissingChildren { parent: String, children: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a missing children validation error.
    pub fn missing_children(parent: impl Into<String>, children: impl Into<String>) -> Self {
        ValidationError::MissingChildren {
            parent: parent.into(),
            children: children.into(),
        }
    }
}
