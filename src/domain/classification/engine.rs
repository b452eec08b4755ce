//! Classification Engine - Scores a decision and assigns its stakes label.

use super::attributes::{CostOfReversal, DecisionAttribute, ImpactDuration, StakeholderInvolvement};
use super::errors::ClassificationError;
use super::inputs::ClassificationInputs;
use super::policy::ClassificationPolicy;
use super::stakes::{ClassificationResult, StakesLabel};

/// Highest score still classified as low stakes (inclusive).
pub const LOW_STAKES_MAX_SCORE: u8 = 3;

/// Lowest score classified as high stakes (inclusive).
pub const HIGH_STAKES_MIN_SCORE: u8 = 7;

/// Pure classifier. Holds nothing but the configured policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationEngine {
    policy: ClassificationPolicy,
}

impl ClassificationEngine {
    pub fn new(policy: ClassificationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    /// Sums the severities of the three attributes. Range is 3..=9.
    pub fn score(
        impact: ImpactDuration,
        cost: CostOfReversal,
        stakeholders: StakeholderInvolvement,
    ) -> u8 {
        impact.severity() + cost.severity() + stakeholders.severity()
    }

    /// Maps an ordinal score onto a label using the inclusive thresholds.
    pub fn label_for_score(score: u8) -> StakesLabel {
        match score {
            s if s <= LOW_STAKES_MAX_SCORE => StakesLabel::LowStakes,
            s if s >= HIGH_STAKES_MIN_SCORE => StakesLabel::HighStakes,
            _ => StakesLabel::ModerateStakes,
        }
    }

    /// Classifies a decision. Total over the attribute domains.
    pub fn classify(
        &self,
        impact: ImpactDuration,
        cost: CostOfReversal,
        stakeholders: StakeholderInvolvement,
    ) -> ClassificationResult {
        let score = Self::score(impact, cost, stakeholders);

        let label = match self.policy {
            ClassificationPolicy::OrdinalScore => Self::label_for_score(score),
            ClassificationPolicy::AnySevereFactor => {
                if impact.is_severe() || cost.is_severe() || stakeholders.is_severe() {
                    StakesLabel::HighStakes
                } else {
                    StakesLabel::LowStakes
                }
            }
        };

        ClassificationResult::new(label, score, self.policy)
    }

    /// Classifies a full set of form selections.
    pub fn classify_inputs(&self, inputs: &ClassificationInputs) -> ClassificationResult {
        self.classify(inputs.impact, inputs.cost, inputs.stakeholders)
    }

    /// Classifies from raw form values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for the first value that does not name a level
    /// of its attribute.
    pub fn classify_labels(
        &self,
        impact: &str,
        cost: &str,
        stakeholders: &str,
    ) -> Result<ClassificationResult, ClassificationError> {
        let impact = ImpactDuration::parse_level(impact)?;
        let cost = CostOfReversal::parse_level(cost)?;
        let stakeholders = StakeholderInvolvement::parse_level(stakeholders)?;
        Ok(self.classify(impact, cost, stakeholders))
    }
}
