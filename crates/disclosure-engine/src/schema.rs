use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::level::DisclosureLevel;

/// A structured content record: field name to value, in declaration order.
pub type Record = IndexMap<String, serde_json::Value>;

/// The attribute taxonomy, keyed by attribute id.
pub type AttributeCatalog = IndexMap<String, AttributeDefinition>;

/// Per-collection association of record field names to attribute ids.
/// Many-to-one is allowed; a field absent from the mapping is unmanaged.
pub type FieldMapping = IndexMap<String, String>;

/// Descriptive label for one disclosure level.  Reporting only; carries no
/// decision logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub level: DisclosureLevel,
    pub name: String,
    pub description: String,
}

/// The kind of information an attribute describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeCategory {
    Identity,
    Contact,
    Organizational,
    Activity,
}

/// How damaging an unintended disclosure of the attribute would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    VeryHigh,
    High,
    Medium,
    Low,
}

/// What happens to a field once its attribute has been ruled hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionStrategy {
    /// Remove the field from the filtered record entirely.
    #[default]
    Omit,
    /// Keep the field, substituting its value.
    Replace,
}

/// A single attribute sensitivity rule.
///
/// `threshold` is the minimum level at which the attribute is visible, so
/// visibility is monotonic in level: visible at L implies visible at every
/// level above L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Stable identifier, e.g. `"ID-01"`.
    pub id: String,
    /// Human-readable name used in warnings and synthesized replacements.
    pub name: String,
    pub category: AttributeCategory,
    pub risk_tier: RiskTier,
    pub threshold: DisclosureLevel,
    #[serde(default)]
    pub redaction: RedactionStrategy,
    /// Substitute text for the `replace` strategy.  When absent, a generic
    /// default is synthesized from the attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    /// Hiding a compliance-protected attribute raises an advisory warning;
    /// the field is hidden regardless.
    #[serde(default)]
    pub compliance_protected: bool,
}

/// Configuration for one named content collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    #[serde(default)]
    pub field_mapping: FieldMapping,
}

/// The partial configuration supplied by the build operator.
///
/// `collections` is mandatory; the other sections fall back to the shipped
/// defaults during [`resolve`](crate::resolve).  Unknown top-level keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperatorConfig {
    /// Replaces the five standard level definitions wholesale when present.
    #[serde(default)]
    pub level_definitions: Option<Vec<LevelDefinition>>,
    /// Each entry replaces (or extends) the default catalog entry with the
    /// same id, as a whole; there is no field-by-field merge.
    #[serde(default)]
    pub attribute_overrides: Vec<AttributeDefinition>,
    pub collections: IndexMap<String, CollectionConfig>,
}

/// The fully populated configuration for one build.  Constructed once by
/// [`resolve`](crate::resolve) and read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub level_definitions: Vec<LevelDefinition>,
    pub catalog: AttributeCatalog,
    pub collections: IndexMap<String, CollectionConfig>,
}
