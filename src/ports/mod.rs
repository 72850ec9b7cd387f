//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LensSerializer` - Turns a finished lens into text
//! - `ExportStorage` - Persists the exported text

mod export_storage;
mod lens_serializer;

pub use export_storage::ExportStorage;
pub use lens_serializer::{ExportError, ExportFormat, ExportedLens, LensSerializer};
