//! Stakes labels and the classification result value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::policy::ClassificationPolicy;

/// How much is riding on a decision. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakesLabel {
    LowStakes,
    ModerateStakes,
    HighStakes,
}

impl StakesLabel {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StakesLabel::LowStakes => "Low Stakes",
            StakesLabel::ModerateStakes => "Moderate Stakes",
            StakesLabel::HighStakes => "High Stakes",
        }
    }

    /// Recommended level of effort for decisions with this label.
    pub fn action_plan(&self) -> &'static str {
        match self {
            StakesLabel::LowStakes => "quick evaluation with minimal resources",
            StakesLabel::ModerateStakes => "moderate research and modelling required",
            StakesLabel::HighStakes => {
                "detailed investigation and stress-testing; allocate significant resources"
            }
        }
    }
}

impl fmt::Display for StakesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of classifying a decision.
///
/// Derived on demand from the three attribute levels and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    label: StakesLabel,
    action_plan: String,
    score: u8,
    policy: ClassificationPolicy,
}

impl ClassificationResult {
    pub(super) fn new(label: StakesLabel, score: u8, policy: ClassificationPolicy) -> Self {
        Self {
            label,
            action_plan: label.action_plan().to_string(),
            score,
            policy,
        }
    }

    pub fn label(&self) -> StakesLabel {
        self.label
    }

    pub fn action_plan(&self) -> &str {
        &self.action_plan
    }

    /// Summed severity of the three attributes (3..=9).
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Policy that produced the label.
    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.action_plan)
    }
}
