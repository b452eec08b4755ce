//! Document adapters - report generation and export.
//!
//! - `TemplateDocumentGenerator` - Renders a session into the AIMED markdown report
//! - `PulldownExportService` - HTML preview via pulldown-cmark, PDF via Pandoc

mod pulldown_export_service;
mod template_generator;

pub use pulldown_export_service::PulldownExportService;
pub use template_generator::{TemplateDocumentGenerator, REPORT_TITLE};
