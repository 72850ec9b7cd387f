//! Lens defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::lens::DEFAULT_LENS_VERSION;

/// Values a new lens starts with
#[derive(Debug, Clone, Deserialize)]
pub struct LensConfig {
    /// Version preloaded into the first step
    #[serde(default = "default_version")]
    pub default_version: String,
}

impl LensConfig {
    /// Validate lens defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_version.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultVersion);
        }
        Ok(())
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            default_version: default_version(),
        }
    }
}

fn default_version() -> String {
    DEFAULT_LENS_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lens_config_defaults() {
        assert_eq!(LensConfig::default().default_version, "1.0");
    }

    #[test]
    fn test_rejects_blank_default_version() {
        let config = LensConfig {
            default_version: " ".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDefaultVersion));
    }
}
