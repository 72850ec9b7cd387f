//! Domain layer containing the lens model and its editors.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifier normalizer, risk level, errors)
//! - `lens` - Value records of a lens document
//! - `editor` - Step-wise editors that keep the nested collections consistent

pub mod editor;
pub mod foundation;
pub mod lens;
