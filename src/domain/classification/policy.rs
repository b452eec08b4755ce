//! Classification policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule used to turn attribute severities into a stakes label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationPolicy {
    /// Sum of the three severities against inclusive thresholds.
    #[default]
    #[serde(alias = "ordinal")]
    OrdinalScore,
    /// Any attribute at its top severity makes the decision high stakes;
    /// everything else is low stakes. Never yields `ModerateStakes`.
    #[serde(alias = "binary")]
    AnySevereFactor,
}

impl fmt::Display for ClassificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationPolicy::OrdinalScore => write!(f, "ordinal_score"),
            ClassificationPolicy::AnySevereFactor => write!(f, "any_severe_factor"),
        }
    }
}
