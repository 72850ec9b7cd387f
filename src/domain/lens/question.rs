//! Question, Choice and the choice-keyed join records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RiskLevel;

use super::count_label;

/// Characters of improvement plan text shown in list previews.
pub const PREVIEW_CHARS: usize = 50;

/// One selectable answer to a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Risk level governing the choice with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRule {
    pub id: String,
    pub risk: RiskLevel,
}

/// Optional remediation guidance for the choice with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementPlan {
    pub id: String,
    pub display_text: String,
    pub url: String,
}

impl ImprovementPlan {
    /// Returns the display text cut to `max_chars`, with `...` when truncated.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.display_text.chars().count() > max_chars {
            let head: String = self.display_text.chars().take(max_chars).collect();
            format!("{}...", head)
        } else {
            self.display_text.clone()
        }
    }
}

/// An assessment item with its choices, risk rules and improvement plans.
///
/// `risk_rules` and `improvement_plans` are joined to `choices` by id.
/// Their order is independent of the choice order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    pub description: String,
    pub choices: Vec<Choice>,
    pub risk_rules: Vec<RiskRule>,
    pub improvement_plans: Vec<ImprovementPlan>,
}

impl Question {
    /// Creates a question with empty choice collections.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Finds a choice by id.
    pub fn find_choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    /// Returns the risk rule joined to a choice id, if any.
    pub fn risk_rule_for(&self, choice_id: &str) -> Option<&RiskRule> {
        self.risk_rules.iter().find(|r| r.id == choice_id)
    }

    /// Returns the risk for a choice id, defaulting to `NONE` when no rule exists.
    pub fn risk_for(&self, choice_id: &str) -> RiskLevel {
        self.risk_rule_for(choice_id)
            .map(|r| r.risk)
            .unwrap_or_default()
    }

    /// Returns the risk as shown in the choice list, or `Not set` without a rule.
    pub fn risk_label_for(&self, choice_id: &str) -> String {
        self.risk_rule_for(choice_id)
            .map(|r| r.risk.to_string())
            .unwrap_or_else(|| "Not set".to_string())
    }

    /// Returns the improvement plan joined to a choice id, if any.
    pub fn improvement_plan_for(&self, choice_id: &str) -> Option<&ImprovementPlan> {
        self.improvement_plans.iter().find(|p| p.id == choice_id)
    }

    /// Returns the plan preview as shown in the choice list, or `None`.
    pub fn improvement_preview_for(&self, choice_id: &str) -> String {
        self.improvement_plan_for(choice_id)
            .map(|p| p.preview(PREVIEW_CHARS))
            .unwrap_or_else(|| "None".to_string())
    }

    /// Returns `N Choice(s)`.
    pub fn choice_count_label(&self) -> String {
        count_label(self.choices.len(), "Choice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup_question() -> Question {
        let mut q = Question::new("is-backup-enabled", "Is backup enabled?", "");
        q.choices.push(Choice {
            id: "yes".to_string(),
            title: "We follow this practice".to_string(),
            description: String::new(),
        });
        q.choices.push(Choice {
            id: "no".to_string(),
            title: "We do not".to_string(),
            description: String::new(),
        });
        q.risk_rules.push(RiskRule {
            id: "yes".to_string(),
            risk: RiskLevel::Low,
        });
        q.improvement_plans.push(ImprovementPlan {
            id: "yes".to_string(),
            display_text: "Keep it up".to_string(),
            url: "https://example.com".to_string(),
        });
        q
    }

    #[test]
    fn risk_for_joins_by_choice_id() {
        let q = backup_question();
        assert_eq!(q.risk_for("yes"), RiskLevel::Low);
    }

    #[test]
    fn risk_for_missing_rule_defaults_to_none() {
        let q = backup_question();
        assert_eq!(q.risk_for("no"), RiskLevel::None);
        assert_eq!(q.risk_label_for("no"), "Not set");
        assert_eq!(q.risk_label_for("yes"), "LOW");
    }

    #[test]
    fn improvement_plan_lookup_is_optional() {
        let q = backup_question();
        assert!(q.improvement_plan_for("yes").is_some());
        assert!(q.improvement_plan_for("no").is_none());
        assert_eq!(q.improvement_preview_for("no"), "None");
    }

    #[test]
    fn preview_truncates_long_text() {
        let plan = ImprovementPlan {
            id: "x".to_string(),
            display_text: "a".repeat(60),
            url: String::new(),
        };
        let preview = plan.preview(PREVIEW_CHARS);
        assert_eq!(preview.len(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_keeps_short_text() {
        let plan = ImprovementPlan {
            id: "x".to_string(),
            display_text: "Short".to_string(),
            url: String::new(),
        };
        assert_eq!(plan.preview(PREVIEW_CHARS), "Short");
    }

    #[test]
    fn choice_count_label_pluralizes() {
        let mut q = Question::new("q", "Q", "");
        assert_eq!(q.choice_count_label(), "0 Choices");
        q.choices.push(Choice::default());
        assert_eq!(q.choice_count_label(), "1 Choice");
    }

    #[test]
    fn question_serializes_with_camel_case_keys_in_order() {
        let q = backup_question();
        let json = serde_json::to_string(&q).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let choices_pos = json.find("\"choices\"").unwrap();
        let rules_pos = json.find("\"riskRules\"").unwrap();
        let plans_pos = json.find("\"improvementPlans\"").unwrap();
        assert!(id_pos < choices_pos && choices_pos < rules_pos && rules_pos < plans_pos);
        assert!(json.contains("\"displayText\":\"Keep it up\""));
        assert!(json.contains("\"risk\":\"LOW\""));
    }
}
