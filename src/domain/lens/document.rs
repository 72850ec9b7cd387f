//! Lens document and its metadata triple.

use serde::{Deserialize, Serialize};

use super::Pillar;

/// Version given to a new lens when nothing else is configured.
pub const DEFAULT_LENS_VERSION: &str = "1.0";

/// The full hierarchical lens document.
///
/// Serializes with the downstream key names and order:
/// `lensVersion`, `name`, `description`, `pillars`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lens {
    #[serde(rename = "lensVersion")]
    pub version: String,
    pub name: String,
    pub description: String,
    pub pillars: Vec<Pillar>,
}

impl Lens {
    /// Creates an empty lens with the given version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            name: String::new(),
            description: String::new(),
            pillars: Vec::new(),
        }
    }

    /// Returns a copy of the metadata triple.
    pub fn info(&self) -> LensInfo {
        LensInfo {
            version: self.version.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Replaces the metadata triple, leaving pillars untouched.
    pub fn apply_info(&mut self, info: LensInfo) {
        self.version = info.version;
        self.name = info.name;
        self.description = info.description;
    }

    /// Total number of questions across all pillars.
    pub fn question_count(&self) -> usize {
        self.pillars.iter().map(|p| p.questions.len()).sum()
    }

    /// Total number of choices across all questions.
    pub fn choice_count(&self) -> usize {
        self.pillars
            .iter()
            .flat_map(|p| p.questions.iter())
            .map(|q| q.choices.len())
            .sum()
    }
}

impl Default for Lens {
    fn default() -> Self {
        Self::new(DEFAULT_LENS_VERSION)
    }
}

/// The first-step form values: version, name and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LensInfo {
    pub version: String,
    pub name: String,
    pub description: String,
}

impl LensInfo {
    /// Creates a metadata triple.
    pub fn new(
        version: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the first required field that is blank, in form order.
    pub fn first_blank_field(&self) -> Option<&'static str> {
        [
            ("version", &self.version),
            ("name", &self.name),
            ("description", &self.description),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lens_uses_default_version() {
        let lens = Lens::default();
        assert_eq!(lens.version, "1.0");
        assert!(lens.name.is_empty());
        assert!(lens.description.is_empty());
        assert!(lens.pillars.is_empty());
    }

    #[test]
    fn apply_info_keeps_pillars() {
        let mut lens = Lens::default();
        lens.pillars.push(Pillar::new("security", "Security"));
        lens.apply_info(LensInfo::new("2.0", "Name", "Desc"));

        assert_eq!(lens.version, "2.0");
        assert_eq!(lens.name, "Name");
        assert_eq!(lens.pillars.len(), 1);
    }

    #[test]
    fn first_blank_field_reports_in_form_order() {
        assert_eq!(LensInfo::new("", "", "").first_blank_field(), Some("version"));
        assert_eq!(LensInfo::new("1.0", "  ", "d").first_blank_field(), Some("name"));
        assert_eq!(LensInfo::new("1.0", "n", "\t").first_blank_field(), Some("description"));
        assert_eq!(LensInfo::new("1.0", "n", "d").first_blank_field(), None);
    }

    #[test]
    fn lens_serializes_lens_version_key_first() {
        let mut lens = Lens::default();
        lens.name = "Test Lens".to_string();
        lens.description = "Test description".to_string();

        let json = serde_json::to_string(&lens).unwrap();
        assert_eq!(
            json,
            r#"{"lensVersion":"1.0","name":"Test Lens","description":"Test description","pillars":[]}"#
        );
    }

    #[test]
    fn lens_deserializes_from_downstream_shape() {
        let json = r#"{"lensVersion":"3","name":"n","description":"d","pillars":[{"id":"p","name":"P","questions":[]}]}"#;
        let lens: Lens = serde_json::from_str(json).unwrap();
        assert_eq!(lens.version, "3");
        assert_eq!(lens.pillars[0].id, "p");
    }
}
