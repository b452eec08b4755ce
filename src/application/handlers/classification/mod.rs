//! Classification handlers.

mod classify_decision;

pub use classify_decision::{ClassifyDecisionCommand, ClassifyDecisionHandler};
