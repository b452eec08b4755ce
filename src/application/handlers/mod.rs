//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod advice;
pub mod case_study;
pub mod classification;
pub mod report;

pub use advice::RequestAdviceHandler;
pub use case_study::{BuildCaseStudyCommand, BuildCaseStudyHandler, BuildCaseStudyResult};
pub use classification::{ClassifyDecisionCommand, ClassifyDecisionHandler};
pub use report::{ExportReportHandler, ReportError};
