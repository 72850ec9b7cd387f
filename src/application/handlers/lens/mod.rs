//! Lens command handlers.

mod export_lens;

pub use export_lens::{ExportLensCommand, ExportLensHandler, ExportLensResult};
