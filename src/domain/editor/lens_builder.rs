//! LensBuilder - Two-step assembly of a lens document.
//!
//! Step one collects the metadata triple, step two delegates the pillar list
//! to a [`PillarSetEditor`]. Completing step two emits the finished lens.

use tracing::{debug, info};

use crate::domain::lens::{Lens, LensInfo};

use super::PillarSetEditor;

/// Where the builder is in the guided flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderStep {
    #[default]
    Info,
    Pillars,
    Complete,
}

/// Owns the lens under construction.
#[derive(Debug, Clone, Default)]
pub struct LensBuilder {
    lens: Lens,
    step: BuilderStep,
}

impl LensBuilder {
    /// Creates a builder whose lens starts at the default version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose lens starts at `version`.
    pub fn with_default_version(version: impl Into<String>) -> Self {
        Self {
            lens: Lens::new(version),
            step: BuilderStep::Info,
        }
    }

    /// Returns the current step.
    pub fn step(&self) -> BuilderStep {
        self.step
    }

    /// Returns the lens as assembled so far.
    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// Returns the metadata to preload into the first step.
    pub fn info(&self) -> LensInfo {
        self.lens.info()
    }

    /// Stores the metadata and moves to the pillar step.
    ///
    /// No-op outside the first step or when any field is blank.
    pub fn submit_info(&mut self, info: LensInfo) -> bool {
        if self.step != BuilderStep::Info {
            debug!(step = ?self.step, "lens info rejected outside info step");
            return false;
        }
        if let Some(field) = info.first_blank_field() {
            debug!(field, "lens info rejected: blank field");
            return false;
        }

        self.lens.apply_info(info);
        self.step = BuilderStep::Pillars;
        debug!(name = %self.lens.name, version = %self.lens.version, "lens info accepted");
        true
    }

    /// Returns to the first step with the current values preloaded.
    ///
    /// Pillars saved by an earlier completion are kept.
    pub fn back_to_info(&mut self) {
        debug!(from = ?self.step, "returning to lens info");
        self.step = BuilderStep::Info;
    }

    /// Opens a pillar editor seeded with the current pillars.
    ///
    /// Only available in the pillar step.
    pub fn pillar_editor(&self) -> Option<PillarSetEditor> {
        (self.step == BuilderStep::Pillars).then(|| PillarSetEditor::new(self.lens.pillars.clone()))
    }

    /// Merges the editor's pillars into the lens and emits the finished lens.
    ///
    /// Returns `None` outside the pillar step or while the editor has no
    /// pillars to save.
    pub fn complete(&mut self, editor: &PillarSetEditor) -> Option<Lens> {
        if self.step != BuilderStep::Pillars {
            debug!(step = ?self.step, "complete rejected outside pillar step");
            return None;
        }
        let pillars = editor.save()?;

        self.lens.pillars = pillars;
        self.step = BuilderStep::Complete;
        info!(
            name = %self.lens.name,
            pillars = self.lens.pillars.len(),
            questions = self.lens.question_count(),
            choices = self.lens.choice_count(),
            "lens completed"
        );
        Some(self.lens.clone())
    }
}
