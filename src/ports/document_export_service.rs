//! Report export port.
//!
//! Turns the markdown report into the two shareable renditions: the PDF
//! download and an HTML preview.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Download filename of the exported report.
pub const REPORT_FILENAME: &str = "AIMED_Report.pdf";

/// Content type the report download is served with.
pub const REPORT_CONTENT_TYPE: &str = "application/octet-stream";

#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Renders the report as PDF bytes.
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError>;

    /// Renders the report as a standalone HTML page. Raw HTML in the
    /// user's answers is shown as text, never interpreted.
    async fn to_html(&self, markdown: &str) -> Result<String, ExportError>;

    /// Whether `to_pdf` can work on this machine.
    async fn is_available(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Pdf,
    Html,
}

impl ExportFormat {
    fn filename(self) -> &'static str {
        match self {
            ExportFormat::Pdf => REPORT_FILENAME,
            ExportFormat::Html => "AIMED_Report.html",
            ExportFormat::Markdown => "AIMED_Report.md",
        }
    }

    fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => REPORT_CONTENT_TYPE,
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }
}

/// A rendered report ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    fn new(format: ExportFormat, content: Vec<u8>) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format.filename().to_string(),
            format,
        }
    }

    /// The PDF download.
    pub fn report(pdf: Vec<u8>) -> Self {
        Self::new(ExportFormat::Pdf, pdf)
    }

    pub fn preview(html: String) -> Self {
        Self::new(ExportFormat::Html, html.into_bytes())
    }

    pub fn markdown(markdown: String) -> Self {
        Self::new(ExportFormat::Markdown, markdown.into_bytes())
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Pandoc or its PDF engine is missing.
    #[error("report export unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("PDF rendering failed: {0}")]
    PdfFailed(String),

    #[error("PDF rendering took longer than {0}s")]
    Timeout(u64),

    #[error("report export I/O failed: {0}")]
    Io(String),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfFailed(reason.into())
    }

    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }

    /// Whole seconds, rounded up.
    pub fn timed_out(after: Duration) -> Self {
        Self::Timeout(after.as_secs() + u64::from(after.subsec_nanos() > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_download_has_fixed_name_and_binary_type() {
        let doc = ExportedDocument::report(b"%PDF-1.7".to_vec());

        assert_eq!(doc.filename, "AIMED_Report.pdf");
        assert_eq!(doc.content_type, "application/octet-stream");
        assert_eq!(doc.format, ExportFormat::Pdf);
        assert_eq!(doc.len(), 8);
    }

    #[test]
    fn preview_and_markdown_share_the_report_stem() {
        let html = ExportedDocument::preview("<html></html>".to_string());
        let md = ExportedDocument::markdown(String::new());

        assert_eq!(html.filename, "AIMED_Report.html");
        assert_eq!(html.content_type, "text/html; charset=utf-8");
        assert_eq!(md.filename, "AIMED_Report.md");
        assert!(md.is_empty());
    }

    #[test]
    fn timeout_never_reports_zero_seconds() {
        assert!(matches!(
            ExportError::timed_out(Duration::from_millis(250)),
            ExportError::Timeout(1)
        ));
        assert!(matches!(
            ExportError::timed_out(Duration::from_secs(120)),
            ExportError::Timeout(120)
        ));
    }

    #[test]
    fn pdf_failure_message_carries_pandoc_output() {
        let err = ExportError::pdf_failed("xelatex not found");
        assert_eq!(err.to_string(), "PDF rendering failed: xelatex not found");
    }
}
