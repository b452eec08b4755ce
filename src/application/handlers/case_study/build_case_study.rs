//! BuildCaseStudyHandler - turns the case study form into markdown.

use tracing::debug;

use crate::domain::case_study::CaseStudy;
use crate::domain::foundation::ValidationError;

/// Command carrying the four case study inputs.
#[derive(Debug, Clone, Default)]
pub struct BuildCaseStudyCommand {
    pub title: String,
    pub context: String,
    pub steps_taken: String,
    pub outcomes: String,
}

/// Result of building a case study.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCaseStudyResult {
    pub case_study: CaseStudy,
    pub markdown: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildCaseStudyHandler;

impl BuildCaseStudyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Builds the case study.
    ///
    /// A blank title is allowed; a form with no body text at all is not.
    pub fn handle(&self, cmd: BuildCaseStudyCommand) -> Result<BuildCaseStudyResult, ValidationError> {
        let blank_body = [&cmd.context, &cmd.steps_taken, &cmd.outcomes]
            .iter()
            .all(|text| text.trim().is_empty());
        if blank_body {
            return Err(ValidationError::empty_field("case study"));
        }

        let case_study = CaseStudy::new(cmd.title, cmd.context, cmd.steps_taken, cmd.outcomes);
        let markdown = self.build(&case_study);

        debug!(title = %case_study.display_title(), "Case study built");
        Ok(BuildCaseStudyResult {
            case_study,
            markdown,
        })
    }

    /// Renders an existing case study.
    pub fn build(&self, case_study: &CaseStudy) -> String {
        case_study.to_markdown()
    }
}
