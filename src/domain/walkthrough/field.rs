//! The eight free-text walkthrough prompts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::framework::FrameworkStep;

/// A walkthrough prompt. Declaration order is the transcript order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkthroughField {
    ProblemDescription,
    BusinessAlignment,
    PossibleSolutions,
    DataNeeds,
    Scenarios,
    Risks,
    SelectedOption,
    ImplementationPlan,
}

impl WalkthroughField {
    /// Returns all fields in transcript order.
    pub fn all() -> &'static [WalkthroughField] {
        &[
            WalkthroughField::ProblemDescription,
            WalkthroughField::BusinessAlignment,
            WalkthroughField::PossibleSolutions,
            WalkthroughField::DataNeeds,
            WalkthroughField::Scenarios,
            WalkthroughField::Risks,
            WalkthroughField::SelectedOption,
            WalkthroughField::ImplementationPlan,
        ]
    }

    /// Framework step that collects this field.
    pub fn step(&self) -> FrameworkStep {
        match self {
            WalkthroughField::ProblemDescription | WalkthroughField::BusinessAlignment => {
                FrameworkStep::Assess
            }
            WalkthroughField::PossibleSolutions | WalkthroughField::DataNeeds => {
                FrameworkStep::Investigate
            }
            WalkthroughField::Scenarios | WalkthroughField::Risks => FrameworkStep::Model,
            WalkthroughField::SelectedOption | WalkthroughField::ImplementationPlan => {
                FrameworkStep::Execute
            }
        }
    }

    /// Label used in transcripts and report sections.
    pub fn display_name(&self) -> &'static str {
        match self {
            WalkthroughField::ProblemDescription => "Problem Description",
            WalkthroughField::BusinessAlignment => "Business Alignment",
            WalkthroughField::PossibleSolutions => "Possible Solutions",
            WalkthroughField::DataNeeds => "Data Needs",
            WalkthroughField::Scenarios => "Scenarios",
            WalkthroughField::Risks => "Risks",
            WalkthroughField::SelectedOption => "Selected Option",
            WalkthroughField::ImplementationPlan => "Implementation Plan",
        }
    }

    /// Question asked on the walkthrough screen.
    pub fn prompt(&self) -> &'static str {
        match self {
            WalkthroughField::ProblemDescription => {
                "Describe the problem or decision you are facing"
            }
            WalkthroughField::BusinessAlignment => {
                "How does this decision align with your business goals?"
            }
            WalkthroughField::PossibleSolutions => {
                "What possible solutions have you identified?"
            }
            WalkthroughField::DataNeeds => {
                "What data do you need to evaluate the options?"
            }
            WalkthroughField::Scenarios => {
                "Which scenarios have you modelled (best, worst, most likely)?"
            }
            WalkthroughField::Risks => "What risks did stress-testing reveal?",
            WalkthroughField::SelectedOption => "Which option have you selected?",
            WalkthroughField::ImplementationPlan => {
                "How will you implement the decision and collect feedback?"
            }
        }
    }
}

impl fmt::Display for WalkthroughField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_fields_in_transcript_order() {
        let all = WalkthroughField::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], WalkthroughField::ProblemDescription);
        assert_eq!(all[7], WalkthroughField::ImplementationPlan);
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn field_steps_never_go_backwards() {
        let steps: Vec<_> = WalkthroughField::all().iter().map(|f| f.step()).collect();
        assert!(steps.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
