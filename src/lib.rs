//! Lens Builder - Guided editor for Well-Architected custom lens documents.
//!
//! A lens is a tree of pillars, questions and choices. Each question also
//! carries risk rules and improvement plans joined to its choices by id.
//! The editors in [`domain::editor`] keep those joins consistent while the
//! document is assembled step by step.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
