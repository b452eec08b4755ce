//! Session module - the single interactive decision session.

mod aggregate;

pub use aggregate::DecisionSession;
