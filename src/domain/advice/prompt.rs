//! Prompt construction for the advice request.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::walkthrough::WalkthroughAnswers;

/// System instruction sent with every advice request.
pub const ADVICE_SYSTEM_PROMPT: &str = "You are an expert providing decision-making advice.";

/// Token cap for the generated advice.
pub const ADVICE_MAX_TOKENS: u32 = 500;

/// Sampling temperature for the generated advice.
pub const ADVICE_TEMPERATURE: f32 = 0.7;

/// Builds the user message: a short instruction followed by the transcript
/// of the eight walkthrough fields in their fixed order.
pub fn advice_user_message(answers: &WalkthroughAnswers) -> String {
    format!(
        "Here is a decision worked through with the AIMED framework. \
         Review it and give concise, practical advice on the decision.\n\n{}",
        answers.transcript()
    )
}

/// Advice returned by the external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdviceText(String);

impl AdviceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AdviceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
