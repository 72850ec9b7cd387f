//! Terminal adapter - Line-based presentation of the lens flow.

mod wizard;

pub use wizard::{TerminalWizard, WizardError};
