//! Template-based document generator adapter.
//!
//! Renders a decision session into the AIMED markdown report: one section
//! per framework step, then the advice text when the session holds one.

use crate::domain::classification::ClassificationResult;
use crate::domain::session::DecisionSession;
use crate::domain::walkthrough::{FrameworkStep, WalkthroughAnswers, WalkthroughField};
use crate::ports::{DocumentError, DocumentGenerator, GenerationOptions};

/// Heading of the generated report.
pub const REPORT_TITLE: &str = "AIMED Decision Report";

const NOT_PROVIDED: &str = "_Not provided._";

/// Template-based implementation of DocumentGenerator.
#[derive(Debug, Clone, Default)]
pub struct TemplateDocumentGenerator;

impl TemplateDocumentGenerator {
    pub fn new() -> Self {
        Self
    }

    fn header(&self, session: &DecisionSession, options: &GenerationOptions) -> String {
        let mut header = format!("# {}\n\n", REPORT_TITLE);
        if options.include_metadata {
            header.push_str(&format!(
                "_Prepared {}_\n\n",
                session.started_at().report_date()
            ));
        }
        header
    }

    fn classification_block(&self, result: &ClassificationResult) -> String {
        format!(
            "> **Stakes:** {} (score {})  \n> **Action plan:** {}\n\n",
            result.label().display_name(),
            result.score(),
            result.action_plan()
        )
    }

    fn step_section(
        &self,
        step: FrameworkStep,
        answers: &WalkthroughAnswers,
        include_empty: bool,
    ) -> String {
        let mut section = format!(
            "## {}. {}\n\n_{}_\n\n",
            step.number(),
            step.title(),
            step.description()
        );

        for (field, text) in answers.for_step(step) {
            let text = text.trim();
            if text.is_empty() && !include_empty {
                continue;
            }
            let body = if text.is_empty() { NOT_PROVIDED } else { text };
            section.push_str(&format!("### {}\n\n{}\n\n", field.display_name(), body));
        }

        let checklist = step.checklist();
        if !checklist.is_empty() {
            for item in checklist {
                section.push_str(&format!("- [ ] {}\n", item));
            }
            section.push('\n');
        }

        section
    }

    /// A step is worth printing if it has a checklist or any answer.
    fn has_content(step: FrameworkStep, answers: &WalkthroughAnswers) -> bool {
        !step.checklist().is_empty() || step.fields().iter().any(|f| answers.is_answered(*f))
    }
}

impl DocumentGenerator for TemplateDocumentGenerator {
    fn generate(
        &self,
        session: &DecisionSession,
        classification: Option<&ClassificationResult>,
        options: GenerationOptions,
    ) -> Result<String, DocumentError> {
        let answers = session.answers();
        let nothing_answered = !WalkthroughField::all()
            .iter()
            .any(|field| answers.is_answered(*field));

        if !options.include_empty_sections && nothing_answered && session.advice().is_none() {
            return Err(DocumentError::missing_data("walkthrough answers"));
        }

        let mut doc = self.header(session, &options);

        if options.include_classification {
            if let Some(result) = classification {
                doc.push_str(&self.classification_block(result));
            }
        }

        for &step in FrameworkStep::all() {
            if !options.include_empty_sections && !Self::has_content(step, answers) {
                continue;
            }
            doc.push_str(&self.step_section(step, answers, options.include_empty_sections));
        }

        if let Some(advice) = session.advice() {
            doc.push_str("## AI Advice\n\n");
            doc.push_str(advice.as_str());
            doc.push('\n');
        }

        Ok(doc)
    }

    fn generate_section(
        &self,
        step: FrameworkStep,
        answers: &WalkthroughAnswers,
    ) -> Result<String, DocumentError> {
        Ok(self.step_section(step, answers, true))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advice::AdviceText;
    use crate::domain::classification::{ClassificationEngine, ClassificationInputs};

    fn answered_session() -> DecisionSession {
        let mut session = DecisionSession::start();
        for field in WalkthroughField::all() {
            session.set_answer(*field, format!("answer for {}", field.display_name()));
        }
        session
    }

    #[test]
    fn report_has_five_sections_in_order() {
        let doc = TemplateDocumentGenerator::new()
            .generate(&answered_session(), None, GenerationOptions::export())
            .unwrap();

        let positions: Vec<usize> = FrameworkStep::all()
            .iter()
            .map(|s| doc.find(&format!("## {}. {}", s.number(), s.title())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(doc.starts_with("# AIMED Decision Report\n"));
    }

    #[test]
    fn empty_answers_render_placeholder() {
        let doc = TemplateDocumentGenerator::new()
            .generate(&DecisionSession::start(), None, GenerationOptions::export())
            .unwrap();

        assert_eq!(doc.matches(NOT_PROVIDED).count(), 8);
        assert!(!doc.contains("## AI Advice"));
    }

    #[test]
    fn debrief_carries_checklist() {
        let section = TemplateDocumentGenerator::new()
            .generate_section(FrameworkStep::Debrief, &WalkthroughAnswers::new())
            .unwrap();

        assert!(section.starts_with("## 5. Debrief and Improve"));
        assert_eq!(section.matches("- [ ] ").count(), 3);
    }

    #[test]
    fn section_lists_both_prompts_of_the_step() {
        let answers = WalkthroughAnswers::new()
            .with(WalkthroughField::Scenarios, "Wet season, supplier failure")
            .with(WalkthroughField::Risks, "Idle crews");

        let section = TemplateDocumentGenerator::new()
            .generate_section(FrameworkStep::Model, &answers)
            .unwrap();

        assert!(section.contains("### Scenarios\n\nWet season, supplier failure"));
        assert!(section.contains("### Risks\n\nIdle crews"));
    }

    #[test]
    fn advice_is_appended_when_present() {
        let mut session = answered_session();
        session.store_advice(AdviceText::new("Pilot the new supplier on one floor."));

        let doc = TemplateDocumentGenerator::new()
            .generate(&session, None, GenerationOptions::export())
            .unwrap();

        let advice_at = doc.find("## AI Advice").unwrap();
        assert!(advice_at > doc.find("## 5.").unwrap());
        assert!(doc.ends_with("Pilot the new supplier on one floor.\n"));
    }

    #[test]
    fn classification_only_when_requested() {
        let mut session = answered_session();
        session.set_selections(ClassificationInputs::default());
        let result = session.classification(&ClassificationEngine::default());

        let generator = TemplateDocumentGenerator::new();
        let preview = generator
            .generate(&session, result.as_ref(), GenerationOptions::full())
            .unwrap();
        let export = generator
            .generate(&session, result.as_ref(), GenerationOptions::export())
            .unwrap();

        assert!(preview.contains("**Stakes:** Low Stakes (score 3)"));
        assert!(!export.contains("**Stakes:**"));
    }

    #[test]
    fn compact_options_skip_unanswered_steps() {
        let mut session = DecisionSession::start();
        session.set_answer(WalkthroughField::ProblemDescription, "Tower crane clash");

        let doc = TemplateDocumentGenerator::new()
            .generate(&session, None, GenerationOptions::default())
            .unwrap();

        assert!(doc.contains("## 1. Assess the Situation"));
        assert!(!doc.contains("### Business Alignment"));
        assert!(!doc.contains("## 2. "));
        assert!(doc.contains("## 5. Debrief and Improve"));
    }

    #[test]
    fn compact_options_reject_blank_session() {
        let err = TemplateDocumentGenerator::new()
            .generate(&DecisionSession::start(), None, GenerationOptions::default())
            .unwrap_err();

        assert!(matches!(err, DocumentError::MissingData { .. }));
    }
}
