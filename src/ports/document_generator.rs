//! Markdown rendering of a decision session.
//!
//! The markdown is the source for every report rendition: the PDF, the
//! HTML preview and the raw `.md` download.

use thiserror::Error;

use crate::domain::classification::ClassificationResult;
use crate::domain::session::DecisionSession;
use crate::domain::walkthrough::{FrameworkStep, WalkthroughAnswers};

/// Renders the AIMED report.
///
/// Sections follow framework order (Assess, Identify, Model, Evaluate,
/// Debrief). The advice text, when the session holds one, closes the report.
pub trait DocumentGenerator: Send + Sync {
    /// Generate the full markdown report.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MissingData` when nothing has been answered
    /// and the options exclude empty sections.
    fn generate(
        &self,
        session: &DecisionSession,
        classification: Option<&ClassificationResult>,
        options: GenerationOptions,
    ) -> Result<String, DocumentError>;

    /// Generate a single framework section.
    fn generate_section(
        &self,
        step: FrameworkStep,
        answers: &WalkthroughAnswers,
    ) -> Result<String, DocumentError>;
}

/// What goes into the report beyond the five sections.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Include the generated-on date under the title.
    pub include_metadata: bool,

    /// Include the stakes classification when one was made.
    pub include_classification: bool,

    /// Include placeholders for unanswered prompts.
    pub include_empty_sections: bool,
}

impl GenerationOptions {
    /// Everything, for on-screen preview.
    pub fn full() -> Self {
        Self {
            include_metadata: true,
            include_classification: true,
            include_empty_sections: true,
        }
    }

    /// Options for the downloadable report.
    pub fn export() -> Self {
        Self {
            include_metadata: true,
            include_classification: false,
            include_empty_sections: true,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// Nothing to render and placeholders were not requested.
    #[error("nothing to report: no {field}")]
    MissingData { field: String },
}

impl DocumentError {
    pub fn missing_data(field: impl Into<String>) -> Self {
        Self::MissingData {
            field: field.into(),
        }
    }
}
