//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text generation behind the advice request
//! - `DocumentGenerator` - Markdown rendering of a session report
//! - `DocumentExportService` - Markdown to PDF/HTML conversion

mod ai_provider;
mod document_export_service;
mod document_generator;

pub use ai_provider::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};
pub(crate) use ai_provider::transport_error;
pub use document_export_service::{
    DocumentExportService, ExportError, ExportFormat, ExportedDocument, REPORT_CONTENT_TYPE,
    REPORT_FILENAME,
};
pub use document_generator::{DocumentError, DocumentGenerator, GenerationOptions};
