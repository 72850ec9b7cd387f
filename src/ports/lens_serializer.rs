//! Lens Serializer Port - Document to text conversion interface.
//!
//! This port defines the contract for turning a finished lens into its
//! textual form. The application layer depends on this trait, while
//! adapters (like JsonLensSerializer) provide the implementation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::domain::lens::Lens;

/// Port for serializing a lens document.
///
/// # Contract
///
/// Implementations must:
/// - Keep the downstream key names (`lensVersion`, `riskRules`, `displayText`, ...)
/// - Keep sequence order exactly as in the lens
/// - Be deterministic for equal input
///
/// # Usage
///
/// ```rust,ignore
/// let serializer: &dyn LensSerializer = get_serializer();
/// let text = serializer.serialize(&lens)?;
/// ```
pub trait LensSerializer: Send + Sync {
    /// The format this serializer produces.
    fn format(&self) -> ExportFormat;

    /// Serialize the lens to text.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Serialization` if the encoder fails.
    fn serialize(&self, lens: &Lens) -> Result<String, ExportError>;
}

/// Export formats supported by the serializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON document (the downstream interchange format).
    #[default]
    Json,
    /// YAML document with the same shape.
    #[serde(alias = "yml")]
    Yaml,
    /// Read-only markdown outline.
    #[serde(alias = "md")]
    Markdown,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Yaml => "application/yaml",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Yaml => write!(f, "yaml"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported lens text with metadata.
#[derive(Debug, Clone)]
pub struct ExportedLens {
    /// The serialized document.
    pub content: String,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for saving.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
    /// SHA-256 of the content, lowercase hex.
    pub checksum: String,
    /// When the export was produced.
    pub exported_at: DateTime<Utc>,
}

impl ExportedLens {
    /// Create a new exported lens, computing its checksum.
    pub fn new(content: String, format: ExportFormat, base_filename: &str) -> Self {
        let checksum = Self::compute_checksum(&content);
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
            checksum,
            exported_at: Utc::now(),
        }
    }

    /// Computes SHA-256 checksum of content.
    fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Returns the content size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}

/// Errors that can occur during lens export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// A lens without pillars is never emitted.
    #[error("Lens has no pillars")]
    EmptyLens,

    /// The encoder failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Invalid filename for storage.
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// I/O error while storing the export.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
