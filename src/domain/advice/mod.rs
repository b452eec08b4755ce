//! Advice request gating.
//!
//! One AI-generated advice text per session, and only once every
//! walkthrough field has been answered.

mod errors;
mod gate;
mod prompt;

pub use errors::GateError;
pub use gate::{AdviceGate, AdviceGateState};
pub use prompt::{
    advice_user_message, AdviceText, ADVICE_MAX_TOKENS, ADVICE_SYSTEM_PROMPT, ADVICE_TEMPERATURE,
};
