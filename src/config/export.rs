//! Export configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Where and how the finished lens is written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output format (`json`, `yaml`, `markdown`)
    #[serde(default)]
    pub format: ExportFormat,

    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Directory to write into; stdout when unset
    pub output_dir: Option<PathBuf>,

    /// File name without extension
    #[serde(default = "default_base_filename")]
    pub base_filename: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.base_filename.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyBaseFilename);
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(ValidationError::InvalidBaseFilename(name.to_string()));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            pretty: default_pretty(),
            output_dir: None,
            base_filename: default_base_filename(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

fn default_base_filename() -> String {
    "lens".to_string()
}
