//! QuestionSetEditor - The questions of one pillar.

use tracing::debug;

use crate::domain::foundation::slugify;
use crate::domain::lens::{Pillar, Question};

use super::ChoiceSetEditor;

/// Editor for the question list of a single pillar.
#[derive(Debug, Clone)]
pub struct QuestionSetEditor {
    pillar: Pillar,
}

impl QuestionSetEditor {
    /// Creates an editor over a snapshot of `pillar`.
    pub fn new(pillar: Pillar) -> Self {
        Self { pillar }
    }

    /// Returns the pillar with the current working question list.
    pub fn pillar(&self) -> &Pillar {
        &self.pillar
    }

    /// Returns the current questions.
    pub fn questions(&self) -> &[Question] {
        &self.pillar.questions
    }

    /// Appends a question whose id is the slug of `title`.
    ///
    /// No-op when the title is blank or slugs to an id another question
    /// already has. A title without letters or digits gets an empty id.
    pub fn add_question(&mut self, title: &str, description: &str) -> bool {
        if title.trim().is_empty() {
            debug!(pillar_id = %self.pillar.id, "add question rejected: blank title");
            return false;
        }
        let id = slugify(title);
        if self.pillar.find_question(&id).is_some() {
            debug!(pillar_id = %self.pillar.id, question_id = %id, "add question rejected: duplicate id");
            return false;
        }

        debug!(pillar_id = %self.pillar.id, question_id = %id, "question added");
        self.pillar
            .questions
            .push(Question::new(id, title, description));
        true
    }

    /// Opens the question at `index` in a choice editor.
    ///
    /// The child works on its own snapshot; bring its result back with
    /// [`merge_question`](Self::merge_question), or drop it to cancel.
    pub fn edit_question(&self, index: usize) -> Option<ChoiceSetEditor> {
        self.pillar
            .questions
            .get(index)
            .cloned()
            .map(ChoiceSetEditor::new)
    }

    /// Replaces every question whose id matches `question.id`.
    ///
    /// Returns false when no question matched.
    pub fn merge_question(&mut self, question: Question) -> bool {
        let mut matched = false;
        for slot in self.pillar.questions.iter_mut().filter(|q| q.id == question.id) {
            *slot = question.clone();
            matched = true;
        }
        debug!(pillar_id = %self.pillar.id, question_id = %question.id, matched, "question merged");
        matched
    }

    /// Removes the question at `index`, with all of its choices.
    pub fn remove_question(&mut self, index: usize) -> bool {
        if index >= self.pillar.questions.len() {
            return false;
        }
        let removed = self.pillar.questions.remove(index);
        debug!(pillar_id = %self.pillar.id, question_id = %removed.id, "question removed");
        true
    }

    /// Returns the pillar with its questions replaced.
    pub fn save(self) -> Pillar {
        self.pillar
    }
}
