//! ClassifyDecisionHandler - records the three attribute selections and
//! returns the derived stakes classification.

use tracing::debug;

use crate::domain::classification::{
    ClassificationEngine, ClassificationError, ClassificationInputs, ClassificationResult,
    CostOfReversal, ImpactDuration, StakeholderInvolvement,
};
use crate::domain::session::DecisionSession;

/// Command carrying the raw selector values, as typed or picked by the user.
#[derive(Debug, Clone)]
pub struct ClassifyDecisionCommand {
    pub impact: String,
    pub cost: String,
    pub stakeholders: String,
}

/// Handler for classifying a decision.
///
/// Classification never touches the advice gate and is recomputed from
/// scratch on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyDecisionHandler {
    engine: ClassificationEngine,
}

impl ClassifyDecisionHandler {
    pub fn new(engine: ClassificationEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }

    /// Parses the selector values, stores them on the session and classifies.
    ///
    /// On `InvalidInput` the session keeps its previous selections.
    pub fn handle(
        &self,
        session: &mut DecisionSession,
        cmd: ClassifyDecisionCommand,
    ) -> Result<ClassificationResult, ClassificationError> {
        let inputs = ClassificationInputs::new(
            cmd.impact.parse::<ImpactDuration>()?,
            cmd.cost.parse::<CostOfReversal>()?,
            cmd.stakeholders.parse::<StakeholderInvolvement>()?,
        );
        Ok(self.select(session, inputs))
    }

    /// Stores already-typed selections and classifies.
    pub fn select(
        &self,
        session: &mut DecisionSession,
        inputs: ClassificationInputs,
    ) -> ClassificationResult {
        session.set_selections(inputs);
        let result = self.engine.classify_inputs(&inputs);

        debug!(
            session_id = %session.id(),
            policy = %self.engine.policy(),
            score = result.score(),
            label = ?result.label(),
            "Decision classified"
        );

        result
    }
}
