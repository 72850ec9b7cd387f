//! YAML serializer adapter.

use crate::domain::lens::Lens;
use crate::ports::{ExportError, ExportFormat, LensSerializer};

/// Serializes a lens as YAML with the same keys as the JSON form.
#[derive(Debug, Clone, Default)]
pub struct YamlLensSerializer;

impl YamlLensSerializer {
    /// Creates a YAML serializer.
    pub fn new() -> Self {
        Self
    }
}

impl LensSerializer for YamlLensSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Yaml
    }

    fn serialize(&self, lens: &Lens) -> Result<String, ExportError> {
        serde_yaml::to_string(lens).map_err(|e| ExportError::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lens::Pillar;

    #[test]
    fn yaml_uses_downstream_key_names() {
        let mut lens = Lens::default();
        lens.name = "Test Lens".to_string();
        lens.description = "Test description".to_string();
        lens.pillars.push(Pillar::new("security", "Security"));

        let yaml = YamlLensSerializer::new().serialize(&lens).unwrap();
        assert!(yaml.starts_with("lensVersion: "));
        assert!(yaml.contains("\nname: Test Lens\n"));
        assert!(yaml.contains("- id: security"));

        let parsed: Lens = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, lens);
    }
}
