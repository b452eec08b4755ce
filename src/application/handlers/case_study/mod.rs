//! Case study handlers.

mod build_case_study;

pub use build_case_study::{BuildCaseStudyCommand, BuildCaseStudyHandler, BuildCaseStudyResult};
