//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier normalizer, the risk level enum and the
//! validation error used at the text input boundary.

mod errors;
mod risk_level;
mod slug;

pub use errors::ValidationError;
pub use risk_level::RiskLevel;
pub use slug::slugify;
