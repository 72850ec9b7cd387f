//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `export` - Lens serializers and export storage
//! - `terminal` - Line-based wizard over the editors

pub mod export;
pub mod terminal;

pub use export::{
    serializer_for, JsonLensSerializer, LocalExportStorage, MarkdownLensRenderer,
    YamlLensSerializer,
};
pub use terminal::{TerminalWizard, WizardError};
