//! The three attribute selections that feed the classifier.

use serde::{Deserialize, Serialize};

use super::attributes::{CostOfReversal, ImpactDuration, StakeholderInvolvement};

/// One selection per attribute, as made on the classification form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationInputs {
    pub impact: ImpactDuration,
    pub cost: CostOfReversal,
    pub stakeholders: StakeholderInvolvement,
}

impl ClassificationInputs {
    pub fn new(
        impact: ImpactDuration,
        cost: CostOfReversal,
        stakeholders: StakeholderInvolvement,
    ) -> Self {
        Self {
            impact,
            cost,
            stakeholders,
        }
    }
}

impl Default for ClassificationInputs {
    /// The first option of every selector.
    fn default() -> Self {
        Self::new(
            ImpactDuration::Short,
            CostOfReversal::Minimal,
            StakeholderInvolvement::InternalOnly,
        )
    }
}
