//! Report renditions: the HTML preview is rendered in-process with
//! pulldown-cmark, the PDF by piping the markdown through Pandoc.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Event, Options, Parser};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::ExportConfig;
use crate::ports::{DocumentExportService, ExportError};

/// Title used when the markdown has no level-one heading.
const FALLBACK_TITLE: &str = "AIMED Report";

/// `is_available` only concerns the PDF path; HTML preview always works.
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Pandoc executable; searched on PATH when it is a bare name.
    pandoc_path: String,

    /// LaTeX engine passed to Pandoc.
    pdf_engine: String,

    /// Upper bound on a single Pandoc run.
    pdf_timeout: Duration,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl PulldownExportService {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            pandoc_path: config.pandoc_path.clone(),
            pdf_engine: config.pdf_engine.clone(),
            pdf_timeout: Duration::from_secs(config.pdf_timeout_secs),
        }
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = path.into();
        self
    }

    pub fn with_pdf_timeout(mut self, timeout: Duration) -> Self {
        self.pdf_timeout = timeout;
        self
    }

    fn pandoc_args(&self) -> Vec<String> {
        vec![
            "--from=markdown".to_string(),
            "--to=pdf".to_string(),
            format!("--pdf-engine={}", self.pdf_engine),
            "--variable=geometry:margin=2cm".to_string(),
            "--variable=fontsize=11pt".to_string(),
        ]
    }

    async fn pandoc_installed(&self) -> bool {
        Command::new(&self.pandoc_path)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocumentExportService for PulldownExportService {
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        if !self.pandoc_installed().await {
            warn!(pandoc = %self.pandoc_path, "Pandoc not found, PDF export unavailable");
            return Err(ExportError::service_unavailable(format!(
                "'{}' could not be run. PDF export requires Pandoc \
                 (https://pandoc.org/installing.html)",
                self.pandoc_path
            )));
        }

        debug!(engine = %self.pdf_engine, bytes = markdown.len(), "Running Pandoc");

        let mut child = Command::new(&self.pandoc_path)
            .args(self.pandoc_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ExportError::pdf_failed(format!("could not start {}: {}", self.pandoc_path, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::io_error(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(self.pdf_timeout, child.wait_with_output())
            .await
            .map_err(|_| ExportError::timed_out(self.pdf_timeout))?
            .map_err(|e| ExportError::pdf_failed(format!("pandoc did not finish: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(stderr.trim().to_string()));
        }

        Ok(output.stdout)
    }

    async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;

        // Answers are free text; any HTML in them is displayed, not run.
        let events = Parser::new_ext(markdown, options).map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });

        let mut body = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut body, events);

        Ok(wrap_html(&body, &report_title(markdown)))
    }

    async fn is_available(&self) -> bool {
        self.pandoc_installed().await
    }
}

/// Text of the first level-one heading.
fn report_title(markdown: &str) -> String {
    markdown
        .lines()
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

fn wrap_html(body: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<main class="aimed-report">
{body}</main>
</body>
</html>"#,
        title = html_escape(title),
        css = REPORT_CSS,
        body = body
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const REPORT_CSS: &str = r#"
body { font-family: Helvetica, Arial, sans-serif; line-height: 1.5; color: #222; max-width: 820px; margin: 0 auto; padding: 2rem; }
h1 { border-bottom: 3px solid #f28c28; padding-bottom: 0.4rem; }
h2 { color: #1d3557; margin-top: 2rem; }
h3 { font-size: 1rem; margin-bottom: 0.2rem; }
em { color: #777; }
ul { padding-left: 1.5rem; }
blockquote { border-left: 4px solid #f28c28; margin: 1rem 0; padding: 0.4rem 1rem; background: #fafafa; }
@media print { body { padding: 0; } h2 { page-break-after: avoid; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "# AIMED Decision Report\n\n\
        ## 1. Assess the Decision\n\n\
        ### Problem Description\n\nCrane delivery slipped two weeks.\n\n\
        ## 5. Debrief and Learn\n\n\
        - [ ] Compare the outcome with the modelled scenarios\n";

    #[tokio::test]
    async fn html_preview_renders_report_structure() {
        let html = PulldownExportService::default().to_html(REPORT).await.unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>AIMED Decision Report</title>"));
        assert!(html.contains("<h2>1. Assess the Decision</h2>"));
        assert!(html.contains("<p>Crane delivery slipped two weeks.</p>"));
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("class=\"aimed-report\""));
    }

    #[tokio::test]
    async fn html_title_is_escaped() {
        let html = PulldownExportService::default()
            .to_html("# Steel & <Concrete>\n")
            .await
            .unwrap();

        assert!(html.contains("<title>Steel &amp; &lt;Concrete&gt;</title>"));
    }

    #[tokio::test]
    async fn html_in_answers_is_escaped() {
        let markdown = "# AIMED Decision Report\n\n\
            **Problem Description:** late <script>alert(1)</script> steel\n\n\
            <iframe src=\"https://example.com\"></iframe>\n";

        let html = PulldownExportService::default().to_html(markdown).await.unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<iframe"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;iframe"));
    }

    #[test]
    fn report_title_falls_back_without_h1() {
        assert_eq!(report_title("## Only a section\n"), FALLBACK_TITLE);
        assert_eq!(report_title("  # Padded title  \n"), "Padded title");
    }

    #[tokio::test]
    async fn pdf_without_pandoc_is_service_unavailable() {
        let service =
            PulldownExportService::default().with_pandoc_path("/nonexistent/bin/pandoc-missing");

        assert!(!service.is_available().await);
        let err = service.to_pdf(REPORT).await.unwrap_err();
        assert!(matches!(err, ExportError::ServiceUnavailable(_)));
        assert!(err.to_string().contains("pandoc-missing"));
    }

    #[test]
    fn pandoc_args_use_configured_engine() {
        let config = ExportConfig {
            pdf_engine: "wkhtmltopdf".to_string(),
            ..ExportConfig::default()
        };
        let args = PulldownExportService::from_config(&config).pandoc_args();

        assert!(args.contains(&"--pdf-engine=wkhtmltopdf".to_string()));
        assert!(args.contains(&"--to=pdf".to_string()));
    }

    #[test]
    fn from_config_carries_timeout() {
        let config = ExportConfig {
            pdf_timeout_secs: 5,
            ..ExportConfig::default()
        };
        let service = PulldownExportService::from_config(&config);
        assert_eq!(service.pdf_timeout, Duration::from_secs(5));
    }
}
