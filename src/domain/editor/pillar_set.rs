//! PillarSetEditor - The pillar list of a lens.

use tracing::debug;

use crate::domain::foundation::slugify;
use crate::domain::lens::Pillar;

use super::QuestionSetEditor;

/// Editor for the pillar list of a lens.
#[derive(Debug, Clone, Default)]
pub struct PillarSetEditor {
    pillars: Vec<Pillar>,
}

impl PillarSetEditor {
    /// Creates an editor seeded with `pillars`.
    pub fn new(pillars: Vec<Pillar>) -> Self {
        Self { pillars }
    }

    /// Returns the current pillars.
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Appends a pillar whose id is the slug of `name`.
    ///
    /// No-op when the name is blank or slugs to an id another pillar already
    /// has. A name without letters or digits gets an empty id.
    pub fn add_pillar(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            debug!("add pillar rejected: blank name");
            return false;
        }
        let id = slugify(name);
        if self.pillars.iter().any(|p| p.id == id) {
            debug!(pillar_id = %id, "add pillar rejected: duplicate id");
            return false;
        }

        debug!(pillar_id = %id, "pillar added");
        self.pillars.push(Pillar::new(id, name));
        true
    }

    /// Opens the pillar at `index` in a question editor.
    ///
    /// Bring the result back with [`merge_pillar`](Self::merge_pillar).
    pub fn edit_pillar(&self, index: usize) -> Option<QuestionSetEditor> {
        self.pillars.get(index).cloned().map(QuestionSetEditor::new)
    }

    /// Replaces every pillar whose id matches `pillar.id`.
    ///
    /// Returns false when no pillar matched.
    pub fn merge_pillar(&mut self, pillar: Pillar) -> bool {
        let mut matched = false;
        for slot in self.pillars.iter_mut().filter(|p| p.id == pillar.id) {
            *slot = pillar.clone();
            matched = true;
        }
        debug!(pillar_id = %pillar.id, matched, "pillar merged");
        matched
    }

    /// Removes the pillar at `index`, with all of its questions.
    pub fn remove_pillar(&mut self, index: usize) -> bool {
        if index >= self.pillars.len() {
            return false;
        }
        let removed = self.pillars.remove(index);
        debug!(pillar_id = %removed.id, "pillar removed");
        true
    }

    /// Returns true when at least one pillar exists.
    pub fn can_save(&self) -> bool {
        !self.pillars.is_empty()
    }

    /// Returns a snapshot of the pillar list, or `None` while it is empty.
    pub fn save(&self) -> Option<Vec<Pillar>> {
        if !self.can_save() {
            debug!("pillar save rejected: no pillars");
            return None;
        }
        Some(self.pillars.clone())
    }
}
