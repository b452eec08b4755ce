//! AIMED Decisions - interactive console entry point.

use std::io;
use std::sync::Arc;

use eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aimed_decisions::adapters::ai::provider_from_config;
use aimed_decisions::adapters::console::{ConsoleApp, ConsoleHandlers, EditorInput};
use aimed_decisions::adapters::document::{PulldownExportService, TemplateDocumentGenerator};
use aimed_decisions::application::{
    BuildCaseStudyHandler, ClassifyDecisionHandler, ExportReportHandler, RequestAdviceHandler,
};
use aimed_decisions::config::AppConfig;
use aimed_decisions::ports::DocumentExportService;

fn setup_logging() {
    // stdout belongs to the questionnaire
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let engine = config.classification.engine();
    info!(policy = ?engine.policy(), "Configuration loaded");

    let provider = provider_from_config(&config.ai).context("Failed to create AI provider")?;
    match &provider {
        Some(provider) => {
            let info = provider.provider_info();
            info!(provider = %info.name, model = %info.model, "Advice provider ready");
        }
        None => warn!(
            provider = ?config.ai.primary_provider,
            "No API key configured, advice requests will fail"
        ),
    }

    let exporter = Arc::new(PulldownExportService::from_config(&config.export));
    if !exporter.is_available().await {
        warn!(pandoc = %config.export.pandoc_path, "Pandoc not found, PDF export unavailable");
    }

    let handlers = ConsoleHandlers {
        classify: ClassifyDecisionHandler::new(engine),
        advice: RequestAdviceHandler::from_config(&config.ai, provider),
        report: ExportReportHandler::new(Arc::new(TemplateDocumentGenerator::new()), exporter, engine),
        case_study: BuildCaseStudyHandler::new(),
    };

    let input = EditorInput::new()?;
    let mut app = ConsoleApp::new(
        handlers,
        config.export.output_dir().to_path_buf(),
        input,
        io::stdout(),
    );
    app.run().await?;

    Ok(())
}
