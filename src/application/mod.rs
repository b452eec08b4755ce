//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Advice
    RequestAdviceHandler,
    // Case study
    BuildCaseStudyCommand, BuildCaseStudyHandler, BuildCaseStudyResult,
    // Classification
    ClassifyDecisionCommand, ClassifyDecisionHandler,
    // Report
    ExportReportHandler, ReportError,
};
