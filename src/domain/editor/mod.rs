//! Editor module - Step-wise editing of a lens document.
//!
//! Control is modal and top-down: the [`LensBuilder`] hands its pillars to a
//! [`PillarSetEditor`], which opens one pillar at a time in a
//! [`QuestionSetEditor`], which opens one question at a time in a
//! [`ChoiceSetEditor`]. Each child works on an owned snapshot and its `save`
//! returns a new value that the parent merges by id. Dropping a child
//! without merging cancels its changes.

mod choice_set;
mod lens_builder;
mod pillar_set;
mod question_set;

pub use choice_set::{ChoiceDraft, ChoiceEditorMode, ChoiceSetEditor};
pub use lens_builder::{BuilderStep, LensBuilder};
pub use pillar_set::PillarSetEditor;
pub use question_set::QuestionSetEditor;
