//! JSON serializer adapter.

use crate::domain::lens::Lens;
use crate::ports::{ExportError, ExportFormat, LensSerializer};

/// Serializes a lens into the downstream JSON shape.
///
/// Pretty output uses two-space indentation.
#[derive(Debug, Clone)]
pub struct JsonLensSerializer {
    pretty: bool,
}

impl JsonLensSerializer {
    /// Creates a pretty-printing serializer.
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Creates a single-line serializer.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Creates a serializer with explicit pretty-printing.
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonLensSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl LensSerializer for JsonLensSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn serialize(&self, lens: &Lens) -> Result<String, ExportError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(lens)
        } else {
            serde_json::to_string(lens)
        };
        result.map_err(|e| ExportError::serialization(e.to_string()))
    }
}
