//! Markdown outline renderer.
//!
//! Produces a read-only, human-readable view of a lens. The outline is for
//! review only and is not meant to be parsed back.

use crate::domain::lens::{Lens, Pillar, Question};
use crate::ports::{ExportError, ExportFormat, LensSerializer};

/// Renders a lens as a markdown outline.
#[derive(Debug, Clone, Default)]
pub struct MarkdownLensRenderer;

impl MarkdownLensRenderer {
    /// Creates a markdown renderer.
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, lens: &Lens) -> String {
        let mut section = format!("# {}\n\n", lens.name);
        section.push_str(&format!("_Lens version {}_\n\n", lens.version));
        if !lens.description.trim().is_empty() {
            section.push_str(&format!("{}\n\n", lens.description));
        }
        section
    }

    fn render_pillar(&self, pillar: &Pillar) -> String {
        let mut section = format!("## {} (`{}`)\n\n", pillar.name, pillar.id);
        if pillar.questions.is_empty() {
            section.push_str("_No questions yet._\n\n");
        }
        for question in &pillar.questions {
            section.push_str(&self.render_question(question));
        }
        section
    }

    fn render_question(&self, question: &Question) -> String {
        let mut section = format!("### {} (`{}`)\n\n", question.title, question.id);
        if !question.description.trim().is_empty() {
            section.push_str(&format!("{}\n\n", question.description));
        }
        if question.choices.is_empty() {
            section.push_str("_No choices yet._\n\n");
            return section;
        }

        for choice in &question.choices {
            section.push_str(&format!(
                "- **{}** (`{}`) - risk: {}\n",
                choice.title,
                choice.id,
                question.risk_label_for(&choice.id)
            ));
            if !choice.description.trim().is_empty() {
                section.push_str(&format!("  - {}\n", choice.description));
            }
            if let Some(plan) = question.improvement_plan_for(&choice.id) {
                if plan.url.trim().is_empty() {
                    section.push_str(&format!("  - Improvement: {}\n", plan.display_text));
                } else {
                    section.push_str(&format!(
                        "  - Improvement: [{}]({})\n",
                        plan.display_text, plan.url
                    ));
                }
            }
        }
        section.push('\n');
        section
    }
}

impl LensSerializer for MarkdownLensRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn serialize(&self, lens: &Lens) -> Result<String, ExportError> {
        let mut doc = self.render_header(lens);
        for pillar in &lens.pillars {
            doc.push_str(&self.render_pillar(pillar));
        }
        Ok(doc.trim_end().to_string() + "\n")
    }
}
