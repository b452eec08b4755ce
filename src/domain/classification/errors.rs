//! Classification error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised by the classification engine.
///
/// The engine is total over its enum domain; this only surfaces when raw
/// values are fed through the parsing entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("invalid {attribute} value: '{value}'")]
    InvalidInput {
        attribute: &'static str,
        value: String,
    },
}

impl ClassificationError {
    /// Creates an invalid input error for the named attribute.
    pub fn invalid_input(attribute: &'static str, value: impl Into<String>) -> Self {
        ClassificationError::InvalidInput {
            attribute,
            value: value.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ClassificationError::InvalidInput { .. } => ErrorCode::InvalidInput,
        }
    }
}
