//! Ordered walkthrough answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::WalkthroughField;
use super::framework::FrameworkStep;

/// Free-text answers keyed by field, iterated in transcript order.
///
/// A field counts as answered only when its trimmed text is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkthroughAnswers {
    answers: BTreeMap<WalkthroughField, String>,
}

impl WalkthroughAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, field: WalkthroughField, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    /// Stores the answer, replacing any earlier one.
    pub fn set(&mut self, field: WalkthroughField, text: impl Into<String>) {
        self.answers.insert(field, text.into());
    }

    /// Returns the stored text, or an empty string when unanswered.
    pub fn get(&self, field: WalkthroughField) -> &str {
        self.answers.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_answered(&self, field: WalkthroughField) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// True when every one of the eight fields has non-blank text.
    pub fn all_fields_non_empty(&self) -> bool {
        WalkthroughField::all().iter().all(|f| self.is_answered(*f))
    }

    /// Fields still waiting for an answer, in transcript order.
    pub fn missing_fields(&self) -> Vec<WalkthroughField> {
        WalkthroughField::all()
            .iter()
            .copied()
            .filter(|f| !self.is_answered(*f))
            .collect()
    }

    /// All eight fields with their (possibly empty) text, in order.
    pub fn iter(&self) -> impl Iterator<Item = (WalkthroughField, &str)> + '_ {
        WalkthroughField::all().iter().map(move |f| (*f, self.get(*f)))
    }

    /// Answers belonging to one framework step.
    pub fn for_step(&self, step: FrameworkStep) -> Vec<(WalkthroughField, &str)> {
        self.iter().filter(|(f, _)| f.step() == step).collect()
    }

    /// Formats the eight fields as `Label: text` lines in transcript order.
    pub fn transcript(&self) -> String {
        self.iter()
            .map(|(field, text)| format!("{}: {}", field.display_name(), text.trim()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> WalkthroughAnswers {
        WalkthroughField::all()
            .iter()
            .fold(WalkthroughAnswers::new(), |answers, field| {
                answers.with(*field, format!("answer for {}", field.display_name()))
            })
    }

    #[test]
    fn empty_answers_are_incomplete() {
        let answers = WalkthroughAnswers::new();
        assert!(!answers.all_fields_non_empty());
        assert_eq!(answers.missing_fields().len(), 8);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let answers = complete().with(WalkthroughField::Risks, "   \n");
        assert!(!answers.all_fields_non_empty());
        assert_eq!(answers.missing_fields(), vec![WalkthroughField::Risks]);
    }

    #[test]
    fn complete_answers_have_no_missing_fields() {
        assert!(complete().all_fields_non_empty());
        assert!(complete().missing_fields().is_empty());
    }

    #[test]
    fn transcript_lists_fields_in_fixed_order_regardless_of_insert_order() {
        let answers = WalkthroughAnswers::new()
            .with(WalkthroughField::ImplementationPlan, "phase it in")
            .with(WalkthroughField::ProblemDescription, "crane shortage");

        let transcript = answers.transcript();
        let lines: Vec<_> = transcript.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Problem Description: crane shortage");
        assert_eq!(lines[1], "Business Alignment: ");
        assert_eq!(lines[7], "Implementation Plan: phase it in");
    }

    #[test]
    fn for_step_returns_only_that_steps_fields() {
        let answers = complete();
        let model = answers.for_step(FrameworkStep::Model);
        assert_eq!(model.len(), 2);
        assert_eq!(model[0].0, WalkthroughField::Scenarios);
        assert_eq!(model[1].0, WalkthroughField::Risks);
        assert!(answers.for_step(FrameworkStep::Debrief).is_empty());
    }

    #[test]
    fn set_replaces_previous_answer() {
        let mut answers = WalkthroughAnswers::new();
        answers.set(WalkthroughField::Scenarios, "first");
        answers.set(WalkthroughField::Scenarios, "second");
        assert_eq!(answers.get(WalkthroughField::Scenarios), "second");
    }
}
