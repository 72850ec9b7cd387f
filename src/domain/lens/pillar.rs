//! Pillar - top-level category grouping questions.

use serde::{Deserialize, Serialize};

use super::{count_label, Question};

/// A category of best practices within a lens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Pillar {
    /// Creates a pillar with no questions.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Finds a question by id.
    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Returns `N Question(s)`.
    pub fn question_count_label(&self) -> String {
        count_label(self.questions.len(), "Question")
    }
}
