//! Classification configuration

use serde::Deserialize;

use crate::domain::classification::{ClassificationEngine, ClassificationPolicy};

/// Selects the stakes classification policy.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ClassificationConfig {
    /// `ordinal_score` (default) or `any_severe_factor`
    #[serde(default)]
    pub policy: ClassificationPolicy,
}

impl ClassificationConfig {
    pub fn engine(&self) -> ClassificationEngine {
        ClassificationEngine::new(self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_ordinal() {
        let config = ClassificationConfig::default();
        assert_eq!(config.engine().policy(), ClassificationPolicy::OrdinalScore);
    }

    #[test]
    fn test_policy_accepts_alias() {
        let config: ClassificationConfig =
            serde_json::from_str(r#"{"policy": "binary"}"#).unwrap();
        assert_eq!(config.policy, ClassificationPolicy::AnySevereFactor);
    }
}
