//! Runtime settings for the advice provider, the stakes policy and report
//! export.
//!
//! Everything comes from `AIMED__<SECTION>__<KEY>` environment variables,
//! optionally seeded from a `.env` file. Each section has defaults, so a
//! bare environment starts the console with advice disabled.
//!
//! ```no_run
//! use aimed_decisions::config::AppConfig;
//!
//! let config = AppConfig::load().expect("unreadable AIMED__* variables");
//! config.validate().expect("out-of-range AIMED__* values");
//!
//! println!("Advice timeout: {:?}", config.ai.timeout());
//! ```

mod ai;
mod classification;
mod error;
mod export;

pub use ai::{AiConfig, AiProvider};
pub use classification::ClassificationConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;

use serde::Deserialize;

/// All settings, one field per `AIMED__<SECTION>` prefix.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Advice provider, model and generation settings
    #[serde(default)]
    pub ai: AiConfig,

    /// Stakes classification policy
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Report export (Pandoc, output directory)
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the process environment.
    ///
    /// `AIMED__AI__OPENAI_API_KEY` lands in `ai.openai_api_key`,
    /// `AIMED__CLASSIFICATION__POLICY` in `classification.policy`.
    ///
    /// # Errors
    ///
    /// `ConfigError` when a value does not parse as its field's type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AIMED")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Range checks that serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::ClassificationPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "AIMED__AI__OPENAI_API_KEY",
        "AIMED__AI__PRIMARY_PROVIDER",
        "AIMED__AI__TIMEOUT_SECS",
        "AIMED__AI__TEMPERATURE",
        "AIMED__CLASSIFICATION__POLICY",
        "AIMED__EXPORT__PDF_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ai.timeout_secs, 60);
        assert_eq!(config.classification.policy, ClassificationPolicy::OrdinalScore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AIMED__AI__OPENAI_API_KEY", "sk-test");
        env::set_var("AIMED__AI__TIMEOUT_SECS", "15");
        env::set_var("AIMED__AI__TEMPERATURE", "0.2");
        env::set_var("AIMED__CLASSIFICATION__POLICY", "any_severe_factor");
        env::set_var("AIMED__EXPORT__PDF_TIMEOUT_SECS", "90");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.primary_api_key(), Some("sk-test"));
        assert_eq!(config.ai.timeout_secs, 15);
        assert_eq!(config.ai.temperature, 0.2);
        assert_eq!(
            config.classification.policy,
            ClassificationPolicy::AnySevereFactor
        );
        assert_eq!(config.export.pdf_timeout_secs, 90);
    }

    #[test]
    fn test_primary_provider_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AIMED__AI__PRIMARY_PROVIDER", "anthropic");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ai.primary_provider, AiProvider::Anthropic);
    }

    #[test]
    fn test_validate_surfaces_section_errors() {
        let config = AppConfig {
            ai: AiConfig {
                timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }
}
