//! Application layer - Commands and Handlers.
//!
//! This layer coordinates the finished domain values with the ports.

pub mod handlers;

pub use handlers::{ExportLensCommand, ExportLensHandler, ExportLensResult};
