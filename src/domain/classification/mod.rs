//! Decision classification.
//!
//! Maps three categorical attributes (impact duration, cost of reversal,
//! stakeholder involvement) to a stakes label and an action plan. The
//! canonical policy sums ordinal severities; the earlier "any severe factor"
//! policy remains selectable through configuration.

mod attributes;
mod engine;
mod errors;
mod inputs;
mod policy;
mod stakes;

pub use attributes::{
    CostOfReversal, DecisionAttribute, ImpactDuration, StakeholderInvolvement, MAX_SEVERITY,
    MIN_SEVERITY,
};
pub use engine::{ClassificationEngine, HIGH_STAKES_MIN_SCORE, LOW_STAKES_MAX_SCORE};
pub use errors::ClassificationError;
pub use inputs::ClassificationInputs;
pub use policy::ClassificationPolicy;
pub use stakes::{ClassificationResult, StakesLabel};
