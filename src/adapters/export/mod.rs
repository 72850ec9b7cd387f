//! Export adapters - Implementations for lens serialization and storage.
//!
//! - `JsonLensSerializer` - The downstream JSON document
//! - `YamlLensSerializer` - The same shape as YAML
//! - `MarkdownLensRenderer` - Read-only outline for review
//! - `LocalExportStorage` - Stores exports on the local filesystem

mod json_serializer;
mod local_file_storage;
mod markdown_renderer;
mod yaml_serializer;

pub use json_serializer::JsonLensSerializer;
pub use local_file_storage::LocalExportStorage;
pub use markdown_renderer::MarkdownLensRenderer;
pub use yaml_serializer::YamlLensSerializer;

use std::sync::Arc;

use crate::ports::{ExportFormat, LensSerializer};

/// Returns the serializer for `format`.
///
/// `pretty` only affects JSON output.
pub fn serializer_for(format: ExportFormat, pretty: bool) -> Arc<dyn LensSerializer> {
    match format {
        ExportFormat::Json => Arc::new(JsonLensSerializer::with_pretty(pretty)),
        ExportFormat::Yaml => Arc::new(YamlLensSerializer::new()),
        ExportFormat::Markdown => Arc::new(MarkdownLensRenderer::new()),
    }
}
