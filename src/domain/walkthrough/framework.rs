//! FrameworkStep enum representing the five AIMED steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::WalkthroughField;

/// The five AIMED steps, in the order the walkthrough visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkStep {
    Assess,
    Investigate,
    Model,
    Execute,
    Debrief,
}

/// Principles for building decisions that gain from stress.
pub const ANTIFRAGILITY_PRINCIPLES: &[(&str, &str)] = &[
    (
        "Stress-Test Scenarios",
        "Simulate extreme conditions to identify vulnerabilities.",
    ),
    (
        "Feedback Loops",
        "Build adaptive processes that evolve in real-time.",
    ),
    (
        "Diversity and Redundancy",
        "Incorporate backups and alternatives to reduce risk.",
    ),
    (
        "Experimentation",
        "Use controlled tests before fully committing to solutions.",
    ),
    (
        "Opportunities in Uncertainty",
        "Reframe challenges as opportunities for innovation.",
    ),
];

impl FrameworkStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [FrameworkStep] {
        &[
            FrameworkStep::Assess,
            FrameworkStep::Investigate,
            FrameworkStep::Model,
            FrameworkStep::Execute,
            FrameworkStep::Debrief,
        ]
    }

    /// 1-based position, as printed in headings.
    pub fn number(&self) -> usize {
        match self {
            FrameworkStep::Assess => 1,
            FrameworkStep::Investigate => 2,
            FrameworkStep::Model => 3,
            FrameworkStep::Execute => 4,
            FrameworkStep::Debrief => 5,
        }
    }

    /// Returns the next step, if any.
    pub fn next(&self) -> Option<FrameworkStep> {
        Self::all().get(self.number()).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            FrameworkStep::Assess => "Assess the Situation",
            FrameworkStep::Investigate => "Investigate Options",
            FrameworkStep::Model => "Model the Outcomes",
            FrameworkStep::Execute => "Execute the Decision",
            FrameworkStep::Debrief => "Debrief and Improve",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FrameworkStep::Assess => "Define the problem and align it with business goals.",
            FrameworkStep::Investigate => {
                "Explore and test solutions in controlled environments."
            }
            FrameworkStep::Model => "Run scenarios and stress-test decisions.",
            FrameworkStep::Execute => "Implement with clarity and feedback mechanisms.",
            FrameworkStep::Debrief => "Review outcomes and institutionalise insights.",
        }
    }

    /// Walkthrough prompts collected during this step. Debrief has none.
    pub fn fields(&self) -> Vec<WalkthroughField> {
        WalkthroughField::all()
            .iter()
            .copied()
            .filter(|field| field.step() == *self)
            .collect()
    }

    /// Review checklist printed for steps that happen after the decision.
    pub fn checklist(&self) -> &'static [&'static str] {
        match self {
            FrameworkStep::Debrief => &[
                "Compare actual outcomes with the modelled scenarios.",
                "Record what worked, what did not, and why.",
                "Feed the lessons into standard procedures for the next decision.",
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for FrameworkStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
