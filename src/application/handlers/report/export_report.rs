//! ExportReportHandler - renders the session report and exports it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::classification::ClassificationEngine;
use crate::domain::foundation::ErrorCode;
use crate::domain::session::DecisionSession;
use crate::ports::{
    DocumentError, DocumentExportService, DocumentGenerator, ExportError, ExportedDocument,
    GenerationOptions,
};

/// Errors from producing or saving a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report generation failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Report export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Could not write report to {path}: {message}")]
    Io { path: String, message: String },
}

impl ReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::Document(_) => ErrorCode::InternalError,
            ReportError::Export(_) | ReportError::Io { .. } => ErrorCode::ExportFailed,
        }
    }
}

/// Handler for the PDF report and the HTML preview.
pub struct ExportReportHandler {
    generator: Arc<dyn DocumentGenerator>,
    exporter: Arc<dyn DocumentExportService>,
    engine: ClassificationEngine,
}

impl ExportReportHandler {
    pub fn new(
        generator: Arc<dyn DocumentGenerator>,
        exporter: Arc<dyn DocumentExportService>,
        engine: ClassificationEngine,
    ) -> Self {
        Self {
            generator,
            exporter,
            engine,
        }
    }

    /// Builds the downloadable PDF report.
    ///
    /// The report carries all five steps, unanswered prompts included,
    /// followed by the advice when the session has one.
    pub async fn export(&self, session: &DecisionSession) -> Result<ExportedDocument, ReportError> {
        let markdown = self
            .generator
            .generate(session, None, GenerationOptions::export())?;

        let pdf = self.exporter.to_pdf(&markdown).await?;
        let document = ExportedDocument::report(pdf);

        info!(
            session_id = %session.id(),
            bytes = document.len(),
            filename = %document.filename,
            "Report exported"
        );
        Ok(document)
    }

    /// Renders the report as an HTML page, classification included.
    pub async fn preview_html(
        &self,
        session: &DecisionSession,
    ) -> Result<ExportedDocument, ReportError> {
        let classification = session.classification(&self.engine);
        let markdown = self.generator.generate(
            session,
            classification.as_ref(),
            GenerationOptions::full(),
        )?;

        let html = self.exporter.to_html(&markdown).await?;
        debug!(session_id = %session.id(), bytes = html.len(), "Report preview rendered");
        Ok(ExportedDocument::preview(html))
    }

    /// Renders the report markdown without conversion.
    pub fn markdown(&self, session: &DecisionSession) -> Result<ExportedDocument, ReportError> {
        let classification = session.classification(&self.engine);
        let markdown = self.generator.generate(
            session,
            classification.as_ref(),
            GenerationOptions::full(),
        )?;
        Ok(ExportedDocument::markdown(markdown))
    }

    /// Writes a document into `dir` under its own filename.
    pub async fn save(
        &self,
        document: &ExportedDocument,
        dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        let path = dir.join(&document.filename);
        let io_error = |e: std::io::Error| ReportError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        tokio::fs::create_dir_all(dir).await.map_err(io_error)?;
        tokio::fs::write(&path, &document.content)
            .await
            .map_err(io_error)?;

        info!(path = %path.display(), "Report saved");
        Ok(path)
    }
}
