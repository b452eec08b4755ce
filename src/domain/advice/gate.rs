//! Session-scoped single-use gate for the advice action.
//!
//! # State machine
//!
//! ```text
//! Unused ──(successful advice call)──> Used   (terminal)
//! ```
//!
//! A failed advice call leaves the gate `Unused`, so the user may try
//! again until one call succeeds. A successful call is strictly one-shot.

use serde::{Deserialize, Serialize};
use std::future::Future;

use super::errors::GateError;
use super::prompt::AdviceText;
use crate::domain::foundation::StateMachine;
use crate::ports::AIError;

/// Lifecycle of the advice allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceGateState {
    #[default]
    Unused,
    Used,
}

impl StateMachine for AdviceGateState {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (AdviceGateState::Unused, AdviceGateState::Used))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            AdviceGateState::Unused => vec![AdviceGateState::Used],
            AdviceGateState::Used => vec![],
        }
    }
}

/// One-shot permission guarding the advice request.
///
/// # Invariants
///
/// - starts `Unused`
/// - moves to `Used` only after the advice call succeeded
/// - never returns to `Unused`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceGate {
    state: AdviceGateState,
}

impl AdviceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AdviceGateState {
        self.state
    }

    pub fn is_used(&self) -> bool {
        self.state == AdviceGateState::Used
    }

    /// Checks the preconditions in their fixed order: a used gate wins over
    /// incomplete input.
    pub fn check(&self, all_fields_non_empty: bool) -> Result<(), GateError> {
        if self.is_used() {
            return Err(GateError::AlreadyRequested);
        }
        if !all_fields_non_empty {
            return Err(GateError::IncompleteInput);
        }
        Ok(())
    }

    /// Runs `invoke` at most once if the gate allows it.
    ///
    /// `invoke` is not called when either precondition fails. On success the
    /// gate moves to `Used`; on failure it stays `Unused` and the service
    /// error is returned.
    pub async fn request_advice<F, Fut>(
        &mut self,
        all_fields_non_empty: bool,
        invoke: F,
    ) -> Result<AdviceText, GateError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, AIError>>,
    {
        self.check(all_fields_non_empty)?;

        let text = invoke().await.map_err(GateError::ServiceError)?;

        self.state = self
            .state
            .transition_to(AdviceGateState::Used)
            .map_err(|_| GateError::AlreadyRequested)?;

        Ok(AdviceText::new(text))
    }
}
