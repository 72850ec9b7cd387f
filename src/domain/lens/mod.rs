//! Lens module - The value records of a lens document.
//!
//! Ownership is strictly hierarchical: a `Lens` owns its pillars, a `Pillar`
//! owns its questions, and a `Question` owns three parallel collections
//! (choices, risk rules, improvement plans) joined by choice id.

mod document;
mod pillar;
mod question;

pub use document::{Lens, LensInfo, DEFAULT_LENS_VERSION};
pub use pillar::Pillar;
pub use question::{Choice, ImprovementPlan, Question, RiskRule, PREVIEW_CHARS};

/// Formats a count with a singular or plural noun (`1 Choice`, `2 Choices`).
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
