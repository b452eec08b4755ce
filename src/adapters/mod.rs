//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - AI provider implementations (OpenAI, Anthropic, Mock)
//! - `document` - Report generation and export (markdown, HTML, PDF)
//! - `console` - Interactive terminal front end

pub mod ai;
pub mod console;
pub mod document;

pub use ai::{AnthropicConfig, AnthropicProvider, MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use console::{ConsoleApp, ConsoleHandlers, EditorInput, Screen};
pub use document::{PulldownExportService, TemplateDocumentGenerator};
