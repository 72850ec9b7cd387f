//! Local Filesystem Storage Adapter - Implementation of ExportStorage.
//!
//! Writes exported lenses into a single directory using atomic writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::ports::{ExportError, ExportStorage, ExportedLens};

/// Maximum exported size accepted (10 MB).
const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Local filesystem storage for exported lenses.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// A failed write, sync, or rename removes the temp file.
///
/// ```rust,ignore
/// let storage = LocalExportStorage::new("./out");
/// let path = storage.write(&exported)?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalExportStorage {
    /// Directory exports are written into.
    base_path: PathBuf,
}

impl LocalExportStorage {
    /// Creates a storage rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the storage root.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Rejects names that are empty or would leave the storage root.
    fn validate_filename(filename: &str) -> Result<(), ExportError> {
        let escapes = filename.contains('/') || filename.contains('\\') || filename.contains("..");
        if filename.trim().is_empty() || escapes {
            return Err(ExportError::InvalidFilename(filename.to_string()));
        }
        Ok(())
    }

    fn io_error(action: &str, path: &Path, e: std::io::Error) -> ExportError {
        ExportError::io_error(format!("Failed to {} {}: {}", action, path.display(), e))
    }
}

impl ExportStorage for LocalExportStorage {
    fn write(&self, exported: &ExportedLens) -> Result<PathBuf, ExportError> {
        Self::validate_filename(&exported.filename)?;
        if exported.size_bytes() > MAX_FILE_SIZE_BYTES {
            return Err(ExportError::io_error(format!(
                "Export of {} bytes exceeds limit of {} bytes",
                exported.size_bytes(),
                MAX_FILE_SIZE_BYTES
            )));
        }

        fs::create_dir_all(&self.base_path)
            .map_err(|e| Self::io_error("create directory", &self.base_path, e))?;

        let final_path = self.base_path.join(&exported.filename);
        let temp_path = self.base_path.join(format!("{}.tmp", exported.filename));

        let mut file = fs::File::create(&temp_path)
            .map_err(|e| Self::io_error("create temp file", &temp_path, e))?;
        let committed = file
            .write_all(exported.content.as_bytes())
            .map_err(|e| Self::io_error("write temp file", &temp_path, e))
            .and_then(|()| {
                file.sync_all()
                    .map_err(|e| Self::io_error("sync temp file", &temp_path, e))
            })
            .and_then(|()| {
                fs::rename(&temp_path, &final_path)
                    .map_err(|e| Self::io_error("rename temp file to", &final_path, e))
            });
        drop(file);

        if let Err(e) = committed {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!(path = %temp_path.display(), error = %cleanup, "failed to remove temp file");
            }
            return Err(e);
        }

        info!(
            path = %final_path.display(),
            bytes = exported.size_bytes(),
            checksum = %exported.checksum,
            "lens export written"
        );
        Ok(final_path)
    }
}
