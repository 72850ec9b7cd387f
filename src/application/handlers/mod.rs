//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod lens;

pub use lens::{ExportLensCommand, ExportLensHandler, ExportLensResult};
