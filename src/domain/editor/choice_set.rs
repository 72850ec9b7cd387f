//! ChoiceSetEditor - Choices, risk rules and improvement plans of one question.
//!
//! The three collections are edited together so that after every applied
//! operation:
//! - every choice id has exactly one risk rule and every risk rule a choice
//! - each choice id has at most one improvement plan
//!
//! Risk rules and plans are matched by choice id, never by position.

use tracing::debug;

use crate::domain::foundation::RiskLevel;
use crate::domain::lens::{Choice, ImprovementPlan, Question, RiskRule};

/// Form values for one choice together with its joined records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub risk: RiskLevel,
    pub improvement_text: String,
    pub improvement_url: String,
}

impl ChoiceDraft {
    /// Creates a draft with the required fields and `NONE` risk.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the risk level.
    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self
    }

    /// Sets the improvement plan text and url.
    pub fn with_improvement(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.improvement_text = text.into();
        self.improvement_url = url.into();
        self
    }

    fn has_required_fields(&self) -> bool {
        !self.id.trim().is_empty() && !self.title.trim().is_empty()
    }

    fn to_choice(&self) -> Choice {
        Choice {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    fn to_risk_rule(&self) -> RiskRule {
        RiskRule {
            id: self.id.clone(),
            risk: self.risk,
        }
    }

    /// Returns the plan this draft describes; blank text means no plan.
    fn to_improvement_plan(&self) -> Option<ImprovementPlan> {
        if self.improvement_text.trim().is_empty() {
            return None;
        }
        Some(ImprovementPlan {
            id: self.id.clone(),
            display_text: self.improvement_text.clone(),
            url: self.improvement_url.clone(),
        })
    }
}

/// Whether the editor is showing the list or holding an edit buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceEditorMode {
    Listing,
    Editing { index: usize },
}

/// Records joined to a choice through its id.
trait ChoiceKeyed {
    fn choice_id(&self) -> &str;
}

impl ChoiceKeyed for RiskRule {
    fn choice_id(&self) -> &str {
        &self.id
    }
}

impl ChoiceKeyed for ImprovementPlan {
    fn choice_id(&self) -> &str {
        &self.id
    }
}

/// Moves the record keyed `old_id` to the key of `record`.
///
/// When `old_id` is still used by another choice the old record stays and
/// `record` is upserted under its own key instead. Any other record already
/// carrying the new key is dropped (last write wins).
fn rekey<T: ChoiceKeyed>(records: &mut Vec<T>, old_id: &str, old_id_shared: bool, record: T) {
    let new_id = record.choice_id().to_string();
    let old_slot = if old_id_shared {
        None
    } else {
        records.iter().position(|r| r.choice_id() == old_id)
    };
    let slot = old_slot.or_else(|| records.iter().position(|r| r.choice_id() == new_id));

    let keep = match slot {
        Some(i) => {
            records[i] = record;
            i
        }
        None => {
            records.push(record);
            records.len() - 1
        }
    };

    let mut i = 0;
    records.retain(|r| {
        let retain = i == keep || r.choice_id() != new_id;
        i += 1;
        retain
    });
}

/// Editor for the choice collections of a single question.
///
/// Seeded with a snapshot of the question; `save` hands the updated question
/// back to the caller, which merges it by question id.
#[derive(Debug, Clone)]
pub struct ChoiceSetEditor {
    question: Question,
    new_choice: ChoiceDraft,
    edit_buffer: Option<(usize, ChoiceDraft)>,
}

impl ChoiceSetEditor {
    /// Creates an editor over a snapshot of `question`.
    pub fn new(question: Question) -> Self {
        Self {
            question,
            new_choice: ChoiceDraft::default(),
            edit_buffer: None,
        }
    }

    /// Returns the question with the current working collections.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Returns the current choices.
    pub fn choices(&self) -> &[Choice] {
        &self.question.choices
    }

    /// Returns the current risk rules.
    pub fn risk_rules(&self) -> &[RiskRule] {
        &self.question.risk_rules
    }

    /// Returns the current improvement plans.
    pub fn improvement_plans(&self) -> &[ImprovementPlan] {
        &self.question.improvement_plans
    }

    /// Returns the current mode.
    pub fn mode(&self) -> ChoiceEditorMode {
        match &self.edit_buffer {
            Some((index, _)) => ChoiceEditorMode::Editing { index: *index },
            None => ChoiceEditorMode::Listing,
        }
    }

    /// Returns true while an edit buffer is active.
    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Adding
    // ════════════════════════════════════════════════════════════════════════════════

    /// Returns the "new choice" form values.
    pub fn new_choice(&self) -> &ChoiceDraft {
        &self.new_choice
    }

    /// Returns the "new choice" form values for editing.
    pub fn new_choice_mut(&mut self) -> &mut ChoiceDraft {
        &mut self.new_choice
    }

    /// Adds the "new choice" form values and clears the form on success.
    ///
    /// On rejection the form keeps its values so they can be corrected.
    pub fn submit_new_choice(&mut self) -> bool {
        let draft = std::mem::take(&mut self.new_choice);
        if self.add_choice(draft.clone()) {
            true
        } else {
            self.new_choice = draft;
            false
        }
    }

    /// Appends a choice, its risk rule and, with non-blank text, its plan.
    ///
    /// No-op when the id or title is blank, when the id is already taken by
    /// another choice, or while an edit buffer is active.
    pub fn add_choice(&mut self, draft: ChoiceDraft) -> bool {
        if self.is_editing() {
            debug!(question_id = %self.question.id, "add choice rejected while editing");
            return false;
        }
        if !draft.has_required_fields() {
            debug!(question_id = %self.question.id, "add choice rejected: blank id or title");
            return false;
        }
        if self.question.find_choice(&draft.id).is_some() {
            debug!(
                question_id = %self.question.id,
                choice_id = %draft.id,
                "add choice rejected: duplicate id"
            );
            return false;
        }

        self.question.choices.push(draft.to_choice());
        self.question.risk_rules.push(draft.to_risk_rule());
        if let Some(plan) = draft.to_improvement_plan() {
            self.question.improvement_plans.push(plan);
        }

        debug!(
            question_id = %self.question.id,
            choice_id = %draft.id,
            risk = %draft.risk,
            "choice added"
        );
        true
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Editing
    // ════════════════════════════════════════════════════════════════════════════════

    /// Loads the choice at `index` and its joined records into the edit buffer.
    ///
    /// Missing joins load as `NONE` risk and blank plan fields. Any earlier
    /// uncommitted buffer is discarded.
    pub fn begin_edit_choice(&mut self, index: usize) -> bool {
        let Some(choice) = self.question.choices.get(index) else {
            debug!(question_id = %self.question.id, index, "edit choice rejected: no such index");
            return false;
        };

        let plan = self.question.improvement_plan_for(&choice.id);
        let draft = ChoiceDraft {
            id: choice.id.clone(),
            title: choice.title.clone(),
            description: choice.description.clone(),
            risk: self.question.risk_for(&choice.id),
            improvement_text: plan.map(|p| p.display_text.clone()).unwrap_or_default(),
            improvement_url: plan.map(|p| p.url.clone()).unwrap_or_default(),
        };

        if self.edit_buffer.is_some() {
            debug!(question_id = %self.question.id, "discarding previous edit buffer");
        }
        self.edit_buffer = Some((index, draft));
        true
    }

    /// Returns the edit buffer, if editing.
    pub fn edit_buffer(&self) -> Option<&ChoiceDraft> {
        self.edit_buffer.as_ref().map(|(_, draft)| draft)
    }

    /// Returns the edit buffer for changes, if editing.
    pub fn edit_buffer_mut(&mut self) -> Option<&mut ChoiceDraft> {
        self.edit_buffer.as_mut().map(|(_, draft)| draft)
    }

    /// Writes the edit buffer back and returns to listing.
    ///
    /// The choice keeps its position. Its risk rule and improvement plan
    /// follow it to the new id; blank improvement text removes the plan.
    /// Duplicate ids introduced by the edit are not checked.
    pub fn commit_edit_choice(&mut self) -> bool {
        let Some((index, draft)) = self.edit_buffer.take() else {
            debug!(question_id = %self.question.id, "commit rejected: not editing");
            return false;
        };
        let Some(slot) = self.question.choices.get_mut(index) else {
            return false;
        };

        let old_id = std::mem::replace(slot, draft.to_choice()).id;
        let new_id = draft.id.clone();
        let old_id_shared = self
            .question
            .choices
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.id == old_id);

        rekey(
            &mut self.question.risk_rules,
            &old_id,
            old_id_shared,
            draft.to_risk_rule(),
        );

        match draft.to_improvement_plan() {
            Some(plan) => rekey(
                &mut self.question.improvement_plans,
                &old_id,
                old_id_shared,
                plan,
            ),
            None => {
                let plans = &mut self.question.improvement_plans;
                if !old_id_shared {
                    plans.retain(|p| p.id != old_id);
                }
                plans.retain(|p| p.id != new_id);
            }
        }

        debug!(
            question_id = %self.question.id,
            old_id = %old_id,
            new_id = %new_id,
            "choice updated"
        );
        true
    }

    /// Discards the edit buffer without touching the collections.
    ///
    /// Returns true if a buffer was discarded.
    pub fn cancel_edit_choice(&mut self) -> bool {
        self.edit_buffer.take().is_some()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Removing and saving
    // ════════════════════════════════════════════════════════════════════════════════

    /// Removes the choice at `index` with its risk rule and improvement plan.
    ///
    /// The joined records are removed by id. They stay only if another
    /// choice still carries the same id. No-op while editing.
    pub fn remove_choice(&mut self, index: usize) -> bool {
        if self.is_editing() {
            debug!(question_id = %self.question.id, "remove choice rejected while editing");
            return false;
        }
        if index >= self.question.choices.len() {
            return false;
        }

        let removed = self.question.choices.remove(index);
        if self.question.find_choice(&removed.id).is_none() {
            self.question.risk_rules.retain(|r| r.id != removed.id);
            self.question.improvement_plans.retain(|p| p.id != removed.id);
        }

        debug!(question_id = %self.question.id, choice_id = %removed.id, "choice removed");
        true
    }

    /// Returns the question with its three collections replaced.
    ///
    /// An uncommitted edit buffer is discarded.
    pub fn save(self) -> Question {
        if self.edit_buffer.is_some() {
            debug!(question_id = %self.question.id, "saving with uncommitted edit discarded");
        }
        self.question
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn editor() -> ChoiceSetEditor {
        ChoiceSetEditor::new(Question::new(
            "is-backup-enabled",
            "Is backup enabled?",
            "Check if backup is enabled for all resources.",
        ))
    }

    fn ids<T: ChoiceKeyed>(records: &[T]) -> Vec<&str> {
        records.iter().map(|r| r.choice_id()).collect()
    }

    fn assert_joins_consistent(editor: &ChoiceSetEditor) {
        let choice_ids: BTreeSet<&str> = editor.choices().iter().map(|c| c.id.as_str()).collect();
        let rule_ids: Vec<&str> = ids(editor.risk_rules());
        let rule_set: BTreeSet<&str> = rule_ids.iter().copied().collect();
        assert_eq!(rule_set, choice_ids);
        assert_eq!(rule_set.len(), rule_ids.len(), "duplicate risk rule ids");

        let plan_ids: Vec<&str> = ids(editor.improvement_plans());
        let plan_set: BTreeSet<&str> = plan_ids.iter().copied().collect();
        assert!(plan_set.is_subset(&choice_ids));
        assert_eq!(plan_set.len(), plan_ids.len(), "duplicate improvement plan ids");
    }

    #[test]
    fn add_choice_appends_choice_and_risk_rule() {
        let mut ed = editor();
        assert!(ed.add_choice(ChoiceDraft::new("yes", "We follow this practice").with_risk(RiskLevel::Low)));

        assert_eq!(ed.choices().len(), 1);
        assert_eq!(ed.risk_rules(), &[RiskRule { id: "yes".to_string(), risk: RiskLevel::Low }]);
        assert!(ed.improvement_plans().is_empty());
    }

    #[test]
    fn add_choice_defaults_risk_to_none() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("no", "We do not"));
        assert_eq!(ed.risk_rules()[0].risk, RiskLevel::None);
    }

    #[test]
    fn add_choice_with_improvement_text_appends_plan() {
        let mut ed = editor();
        ed.add_choice(
            ChoiceDraft::new("no", "We do not")
                .with_improvement("Start implementing...", "https://example.com"),
        );
        ed.add_choice(ChoiceDraft::new("partly", "Partly").with_improvement("   ", "https://ignored"));

        assert_eq!(
            ed.improvement_plans(),
            &[ImprovementPlan {
                id: "no".to_string(),
                display_text: "Start implementing...".to_string(),
                url: "https://example.com".to_string(),
            }]
        );
    }

    #[test]
    fn add_choice_rejects_blank_id_or_title() {
        let mut ed = editor();
        assert!(!ed.add_choice(ChoiceDraft::new("", "Title")));
        assert!(!ed.add_choice(ChoiceDraft::new("id", "   ")));
        assert!(ed.choices().is_empty());
        assert!(ed.risk_rules().is_empty());
    }

    #[test]
    fn add_choice_rejects_duplicate_id() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("yes", "Yes"));
        assert!(!ed.add_choice(ChoiceDraft::new("yes", "Yes again")));
        assert_eq!(ed.choices().len(), 1);
    }

    #[test]
    fn submit_new_choice_clears_form_only_on_success() {
        let mut ed = editor();
        ed.new_choice_mut().id = "yes".to_string();
        assert!(!ed.submit_new_choice());
        assert_eq!(ed.new_choice().id, "yes");

        ed.new_choice_mut().title = "Yes".to_string();
        ed.new_choice_mut().risk = RiskLevel::High;
        assert!(ed.submit_new_choice());
        assert_eq!(ed.new_choice(), &ChoiceDraft::default());
        assert_eq!(ed.question().risk_for("yes"), RiskLevel::High);
    }

    #[test]
    fn begin_edit_loads_joined_records() {
        let mut ed = editor();
        ed.add_choice(
            ChoiceDraft::new("no", "We do not")
                .with_description("Not implemented")
                .with_risk(RiskLevel::High)
                .with_improvement("Fix it", "https://example.com/fix"),
        );

        assert!(ed.begin_edit_choice(0));
        assert_eq!(ed.mode(), ChoiceEditorMode::Editing { index: 0 });
        let buffer = ed.edit_buffer().unwrap();
        assert_eq!(buffer.description, "Not implemented");
        assert_eq!(buffer.risk, RiskLevel::High);
        assert_eq!(buffer.improvement_text, "Fix it");
        assert_eq!(buffer.improvement_url, "https://example.com/fix");
    }

    #[test]
    fn begin_edit_defaults_missing_joins() {
        let mut question = Question::new("q", "Q", "");
        question.choices.push(Choice {
            id: "orphan".to_string(),
            title: "Orphan".to_string(),
            description: String::new(),
        });
        let mut ed = ChoiceSetEditor::new(question);

        assert!(ed.begin_edit_choice(0));
        let buffer = ed.edit_buffer().unwrap();
        assert_eq!(buffer.risk, RiskLevel::None);
        assert!(buffer.improvement_text.is_empty());
        assert!(buffer.improvement_url.is_empty());
    }

    #[test]
    fn begin_edit_rejects_out_of_range_index() {
        let mut ed = editor();
        assert!(!ed.begin_edit_choice(0));
        assert_eq!(ed.mode(), ChoiceEditorMode::Listing);
    }

    #[test]
    fn begin_edit_on_another_index_discards_buffer() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A"));
        ed.add_choice(ChoiceDraft::new("b", "B"));

        ed.begin_edit_choice(0);
        ed.edit_buffer_mut().unwrap().title = "Changed".to_string();
        ed.begin_edit_choice(1);
        assert!(ed.commit_edit_choice());

        assert_eq!(ed.choices()[0].title, "A");
        assert_eq!(ed.choices()[1].title, "B");
    }

    #[test]
    fn commit_edit_rekeys_risk_rule_and_plan_in_place() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A").with_improvement("Plan A", "https://a"));
        ed.add_choice(ChoiceDraft::new("b", "B").with_risk(RiskLevel::Low));

        ed.begin_edit_choice(0);
        {
            let buffer = ed.edit_buffer_mut().unwrap();
            buffer.id = "c".to_string();
            buffer.risk = RiskLevel::Medium;
            buffer.improvement_text = "Plan C".to_string();
        }
        assert!(ed.commit_edit_choice());

        assert_eq!(ed.mode(), ChoiceEditorMode::Listing);
        assert_eq!(ed.choices()[0].id, "c");
        assert_eq!(ids(ed.risk_rules()), vec!["c", "b"]);
        assert_eq!(ed.risk_rules()[0].risk, RiskLevel::Medium);
        assert_eq!(ed.improvement_plans().len(), 1);
        assert_eq!(ed.improvement_plans()[0].id, "c");
        assert_eq!(ed.improvement_plans()[0].display_text, "Plan C");
        assert_eq!(ed.improvement_plans()[0].url, "https://a");
        assert_joins_consistent(&ed);
    }

    #[test]
    fn commit_edit_with_blank_text_removes_plan() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A").with_improvement("Plan A", ""));

        ed.begin_edit_choice(0);
        ed.edit_buffer_mut().unwrap().improvement_text = " ".to_string();
        ed.commit_edit_choice();

        assert!(ed.improvement_plans().is_empty());
        assert_joins_consistent(&ed);
    }

    #[test]
    fn commit_edit_appends_plan_when_none_existed() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A"));
        ed.add_choice(ChoiceDraft::new("b", "B").with_improvement("Plan B", ""));

        ed.begin_edit_choice(0);
        ed.edit_buffer_mut().unwrap().improvement_text = "Plan A".to_string();
        ed.commit_edit_choice();

        assert_eq!(ids(ed.improvement_plans()), vec!["b", "a"]);
    }

    #[test]
    fn commit_edit_appends_risk_rule_when_missing() {
        let mut question = Question::new("q", "Q", "");
        question.choices.push(Choice {
            id: "orphan".to_string(),
            title: "Orphan".to_string(),
            description: String::new(),
        });
        let mut ed = ChoiceSetEditor::new(question);

        ed.begin_edit_choice(0);
        ed.edit_buffer_mut().unwrap().risk = RiskLevel::High;
        ed.commit_edit_choice();

        assert_eq!(ed.risk_rules(), &[RiskRule { id: "orphan".to_string(), risk: RiskLevel::High }]);
    }

    #[test]
    fn commit_edit_onto_existing_id_is_last_write_wins_and_currently_unchecked() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A").with_risk(RiskLevel::Low));
        ed.add_choice(ChoiceDraft::new("b", "B").with_risk(RiskLevel::High).with_improvement("Plan B", ""));

        ed.begin_edit_choice(0);
        {
            let buffer = ed.edit_buffer_mut().unwrap();
            buffer.id = "b".to_string();
            buffer.risk = RiskLevel::Medium;
        }
        assert!(ed.commit_edit_choice());

        // Duplicate sibling ids are accepted on edit.
        assert_eq!(ed.choices()[0].id, "b");
        assert_eq!(ed.choices()[1].id, "b");
        assert_eq!(ed.risk_rules(), &[RiskRule { id: "b".to_string(), risk: RiskLevel::Medium }]);
        assert!(ed.improvement_plans().is_empty());
        assert_joins_consistent(&ed);
    }

    #[test]
    fn commit_without_buffer_is_rejected() {
        let mut ed = editor();
        assert!(!ed.commit_edit_choice());
    }

    #[test]
    fn cancel_edit_discards_buffer_without_mutation() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A"));
        let before = ed.question().clone();

        ed.begin_edit_choice(0);
        ed.edit_buffer_mut().unwrap().id = "z".to_string();
        assert!(ed.cancel_edit_choice());

        assert_eq!(ed.question(), &before);
        assert_eq!(ed.mode(), ChoiceEditorMode::Listing);
        assert!(!ed.cancel_edit_choice());
    }

    #[test]
    fn remove_choice_cascades_by_id() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A").with_improvement("Plan A", ""));
        ed.add_choice(ChoiceDraft::new("b", "B").with_improvement("Plan B", ""));
        ed.add_choice(ChoiceDraft::new("c", "C"));

        assert!(ed.remove_choice(1));

        assert_eq!(ed.choices().iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(ids(ed.risk_rules()), vec!["a", "c"]);
        assert_eq!(ids(ed.improvement_plans()), vec!["a"]);
    }

    #[test]
    fn remove_choice_uses_id_not_position_for_joins() {
        let mut question = Question::new("q", "Q", "");
        for id in ["a", "b"] {
            question.choices.push(Choice {
                id: id.to_string(),
                title: id.to_uppercase(),
                description: String::new(),
            });
        }
        question.risk_rules.push(RiskRule { id: "b".to_string(), risk: RiskLevel::High });
        question.risk_rules.push(RiskRule { id: "a".to_string(), risk: RiskLevel::Low });
        let mut ed = ChoiceSetEditor::new(question);

        ed.remove_choice(0);

        assert_eq!(ed.risk_rules(), &[RiskRule { id: "b".to_string(), risk: RiskLevel::High }]);
    }

    #[test]
    fn remove_choice_rejected_while_editing_or_out_of_range() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("a", "A"));
        assert!(!ed.remove_choice(5));

        ed.begin_edit_choice(0);
        assert!(!ed.remove_choice(0));
        assert!(!ed.add_choice(ChoiceDraft::new("b", "B")));
        assert_eq!(ed.choices().len(), 1);
    }

    #[test]
    fn save_returns_question_with_collections() {
        let mut ed = editor();
        ed.add_choice(ChoiceDraft::new("yes", "Yes").with_risk(RiskLevel::Low));
        ed.begin_edit_choice(0);
        ed.edit_buffer_mut().unwrap().title = "Uncommitted".to_string();

        let question = ed.save();
        assert_eq!(question.id, "is-backup-enabled");
        assert_eq!(question.choices[0].title, "Yes");
        assert_eq!(question.risk_rules.len(), 1);
    }
}
