//! Report export configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Pandoc and output settings for the report export.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Pandoc executable (name on PATH or absolute path)
    #[serde(default = "default_pandoc_path")]
    pub pandoc_path: String,

    /// LaTeX engine Pandoc renders the PDF with
    #[serde(default = "default_pdf_engine")]
    pub pdf_engine: String,

    /// Upper bound on one Pandoc run, in seconds
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Directory the downloaded report is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl ExportConfig {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pandoc_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("EXPORT__PANDOC_PATH"));
        }

        if self.pdf_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(ValidationError::InvalidOutputDir(
                self.output_dir.display().to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pandoc_path: default_pandoc_path(),
            pdf_engine: default_pdf_engine(),
            pdf_timeout_secs: default_pdf_timeout(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_pandoc_path() -> String {
    "pandoc".to_string()
}

fn default_pdf_engine() -> String {
    "xelatex".to_string()
}

fn default_pdf_timeout() -> u64 {
    30
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.pandoc_path, "pandoc");
        assert_eq!(config.pdf_engine, "xelatex");
        assert_eq!(config.pdf_timeout_secs, 30);
        assert_eq!(config.output_dir(), Path::new("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_dir_must_be_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ExportConfig {
            output_dir: file.path().to_path_buf(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidOutputDir(_))
        ));
    }

    #[test]
    fn test_missing_output_dir_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            output_dir: dir.path().join("reports"),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_pdf_timeout_rejected() {
        let config = ExportConfig {
            pdf_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }
}
