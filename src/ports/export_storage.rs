//! Export Storage Port - Where exported lens text is written.

use std::path::PathBuf;

use super::{ExportError, ExportedLens};

/// Port for persisting an exported lens.
///
/// # Contract
///
/// Implementations must:
/// - Write the content completely or not at all
/// - Use `exported.filename` as the file name
/// - Return the location that was written
pub trait ExportStorage: Send + Sync {
    /// Writes the exported lens and returns its path.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidFilename` for names that would escape
    /// the storage root, and `ExportError::IoError` on write failure.
    fn write(&self, exported: &ExportedLens) -> Result<PathBuf, ExportError>;
}
