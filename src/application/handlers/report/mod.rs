//! Report handlers.

mod export_report;

pub use export_report::{ExportReportHandler, ReportError};
