//! Case study value object.
//!
//! A retrospective write-up of a decision made with the AIMED framework.

use serde::{Deserialize, Serialize};

/// Title used when the user leaves the title blank.
pub const UNTITLED_CASE_STUDY: &str = "Untitled Case Study";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub context: String,
    pub steps_taken: String,
    pub outcomes: String,
}

impl CaseStudy {
    pub fn new(
        title: impl Into<String>,
        context: impl Into<String>,
        steps_taken: impl Into<String>,
        outcomes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            context: context.into(),
            steps_taken: steps_taken.into(),
            outcomes: outcomes.into(),
        }
    }

    /// Trimmed title, or the untitled placeholder.
    pub fn display_title(&self) -> &str {
        match self.title.trim() {
            "" => UNTITLED_CASE_STUDY,
            title => title,
        }
    }

    /// Renders the case study as markdown.
    pub fn to_markdown(&self) -> String {
        format!(
            "### {}\n\n**Context:** {}\n\n**Steps Taken:** {}\n\n**Outcomes:** {}\n",
            self.display_title(),
            self.context.trim(),
            self.steps_taken.trim(),
            self.outcomes.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_falls_back_to_placeholder() {
        let study = CaseStudy::new("  ", "ctx", "steps", "outcome");
        assert_eq!(study.display_title(), UNTITLED_CASE_STUDY);
    }

    #[test]
    fn markdown_has_all_four_parts() {
        let study = CaseStudy::new(
            "Tower crane selection",
            "Two cranes, one site",
            "Ran the AIMED steps",
            "Hired the smaller crane",
        );
        let md = study.to_markdown();

        assert!(md.starts_with("### Tower crane selection\n"));
        assert!(md.contains("**Context:** Two cranes, one site"));
        assert!(md.contains("**Steps Taken:** Ran the AIMED steps"));
        assert!(md.contains("**Outcomes:** Hired the smaller crane"));
    }
}
