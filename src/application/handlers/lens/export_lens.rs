//! ExportLensHandler - Command handler for emitting a finished lens.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::lens::Lens;
use crate::ports::{ExportError, ExportStorage, ExportedLens, LensSerializer};

/// Command to export a lens.
#[derive(Debug, Clone)]
pub struct ExportLensCommand {
    pub lens: Lens,
    /// File name without extension.
    pub base_filename: String,
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportLensResult {
    pub exported: ExportedLens,
    /// Where the export was written, when a storage is configured.
    pub location: Option<PathBuf>,
}

/// Handler for exporting lenses.
pub struct ExportLensHandler {
    serializer: Arc<dyn LensSerializer>,
    storage: Option<Arc<dyn ExportStorage>>,
}

impl ExportLensHandler {
    /// Creates a handler that only serializes.
    pub fn new(serializer: Arc<dyn LensSerializer>) -> Self {
        Self {
            serializer,
            storage: None,
        }
    }

    /// Also writes every export to `storage`.
    pub fn with_storage(mut self, storage: Arc<dyn ExportStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn handle(&self, cmd: ExportLensCommand) -> Result<ExportLensResult, ExportError> {
        // 1. A lens without pillars is never emitted
        if cmd.lens.pillars.is_empty() {
            return Err(ExportError::EmptyLens);
        }

        // 2. Serialize
        let format = self.serializer.format();
        let content = self.serializer.serialize(&cmd.lens)?;
        let exported = ExportedLens::new(content, format, &cmd.base_filename);

        // 3. Store
        let location = match &self.storage {
            Some(storage) => Some(storage.write(&exported)?),
            None => None,
        };

        info!(
            lens = %cmd.lens.name,
            format = %format,
            size_bytes = exported.size_bytes(),
            checksum = %exported.checksum,
            stored = location.is_some(),
            "lens exported"
        );

        Ok(ExportLensResult { exported, location })
    }
}
