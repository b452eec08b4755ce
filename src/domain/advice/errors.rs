//! Advice gate error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::ports::AIError;

/// Reasons an advice request can be refused or fail.
#[derive(Debug, Error)]
pub enum GateError {
    /// Advice was already delivered in this session.
    #[error("advice has already been requested in this session")]
    AlreadyRequested,

    /// At least one walkthrough field is still empty.
    #[error("all walkthrough fields must be filled in before requesting advice")]
    IncompleteInput,

    /// The advice service failed. The gate is not consumed.
    #[error("advice service failed: {0}")]
    ServiceError(#[source] AIError),
}

impl GateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GateError::AlreadyRequested => ErrorCode::AlreadyRequested,
            GateError::IncompleteInput => ErrorCode::IncompleteInput,
            GateError::ServiceError(_) => ErrorCode::ServiceError,
        }
    }

    /// Message suitable for a user-facing warning.
    pub fn user_message(&self) -> String {
        match self {
            GateError::AlreadyRequested => {
                "You have already requested advice for this session.".to_string()
            }
            GateError::IncompleteInput => {
                "Please complete all walkthrough fields before requesting advice.".to_string()
            }
            GateError::ServiceError(err) => {
                format!("The advice service could not be reached: {}", err)
            }
        }
    }
}

impl From<AIError> for GateError {
    fn from(err: AIError) -> Self {
        GateError::ServiceError(err)
    }
}
