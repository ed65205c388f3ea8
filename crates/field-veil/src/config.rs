use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use disclosure_engine::OperatorConfig;

/// Load an [`OperatorConfig`] from a YAML file on disk.
///
/// Validates the config after deserialization (collection presence, unique
/// override ids, unique level definitions).  The engine's resolver is a pure
/// merge with no validation of its own; caller errors are caught here, at
/// the host boundary.
pub fn load(path: impl AsRef<Path>) -> Result<OperatorConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file: {}", path.display()))?;
    load_from_str(&contents)
        .with_context(|| format!("failed to parse configuration file: {}", path.display()))
}

/// Parse and validate an [`OperatorConfig`] from a YAML string.
///
/// This is the primary entry point used in tests.
pub fn load_from_str(yaml: &str) -> Result<OperatorConfig> {
    let config: OperatorConfig =
        serde_yml::from_str(yaml).context("YAML deserialization failed")?;
    validate(&config)?;
    Ok(config)
}

/// Run post-deserialization validation checks.
fn validate(config: &OperatorConfig) -> Result<()> {
    if config.collections.is_empty() {
        bail!("configuration must declare at least one collection");
    }

    // Override ids must be present and unique.
    let mut seen = HashSet::new();
    for attribute in &config.attribute_overrides {
        if attribute.id.is_empty() {
            bail!("attribute override id must not be empty");
        }
        if !seen.insert(&attribute.id) {
            bail!("duplicate attribute override id: '{}'", attribute.id);
        }
    }

    // One definition per level.
    if let Some(definitions) = &config.level_definitions {
        let mut levels = HashSet::new();
        for definition in definitions {
            if !levels.insert(definition.level) {
                bail!("duplicate level definition for level {}", definition.level);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_minimal_config() {
        let yaml = r#"
collections:
  staff:
    field_mapping:
      name: ID-01
"#;
        let config = load_from_str(yaml).unwrap();
        assert_eq!(config.collections.len(), 1);
        assert!(config.attribute_overrides.is_empty());
    }

    #[test]
    fn load_full_config() {
        let yaml = r#"
level_definitions:
  - level: 0
    name: Closed
    description: Nothing personal is published.
  - level: 4
    name: Open
    description: Everything is published.
attribute_overrides:
  - id: ID-01
    name: Full name
    category: identity
    risk_tier: very-high
    threshold: 3
    redaction: replace
    replacement: "Team member"
    compliance_protected: true
collections:
  staff:
    field_mapping:
      name: ID-01
      email: CV-01
  events:
    field_mapping:
      organizer: ID-01
"#;
        let config = load_from_str(yaml).unwrap();
        assert_eq!(config.collections.len(), 2);
        assert_eq!(config.attribute_overrides.len(), 1);
        assert!(config.attribute_overrides[0].compliance_protected);
        assert_eq!(config.level_definitions.unwrap().len(), 2);
    }

    #[test]
    fn reject_missing_collections() {
        let yaml = r#"
collections: {}
"#;
        let err = load_from_str(yaml).unwrap_err();
        assert!(
            err.to_string().contains("at least one collection"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn reject_duplicate_override_ids() {
        let yaml = r#"
attribute_overrides:
  - id: ID-01
    name: Full name
    category: identity
    risk_tier: high
    threshold: 2
  - id: ID-01
    name: Full name again
    category: identity
    risk_tier: high
    threshold: 3
collections:
  staff:
    field_mapping: {}
"#;
        let err = load_from_str(yaml).unwrap_err();
        assert!(
            err.to_string().contains("duplicate attribute override id"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn reject_empty_override_id() {
        let yaml = r#"
attribute_overrides:
  - id: ""
    name: Nameless
    category: identity
    risk_tier: low
    threshold: 1
collections:
  staff:
    field_mapping: {}
"#;
        let err = load_from_str(yaml).unwrap_err();
        assert!(
            err.to_string().contains("must not be empty"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn reject_duplicate_level_definitions() {
        let yaml = r#"
level_definitions:
  - level: 2
    name: Standard
    description: One.
  - level: 2
    name: Also standard
    description: Two.
collections:
  staff:
    field_mapping: {}
"#;
        let err = load_from_str(yaml).unwrap_err();
        assert!(
            err.to_string().contains("duplicate level definition"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn load_from_nonexistent_file() {
        let err = load("/does/not/exist.yaml").unwrap_err();
        assert!(
            err.to_string().contains("failed to read configuration file"),
            "unexpected error: {err}"
        );
    }
}
