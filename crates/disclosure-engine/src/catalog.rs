//! The shipped attribute taxonomy.
//!
//! Twenty attribute sensitivity rules across the four categories, plus the
//! five standard level definitions.  Both are kept as static seed slices and
//! materialized into their typed form at resolution time, so the data is
//! available at zero runtime cost until a build actually needs it.

use crate::level::DisclosureLevel;
use crate::schema::{
    AttributeCatalog, AttributeCategory, AttributeDefinition, LevelDefinition, RedactionStrategy,
    RiskTier,
};

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

struct AttributeSeed {
    id: &'static str,
    name: &'static str,
    category: AttributeCategory,
    risk_tier: RiskTier,
    threshold: u8,
    redaction: RedactionStrategy,
    replacement: Option<&'static str>,
    compliance_protected: bool,
}

/// The default 20-entry catalog.
///
/// Thresholds follow the standard level ladder: 1 = structure, 2 = names and
/// portraits, 3 = history and detail, 4 = direct contact channels.
static DEFAULT_ATTRIBUTES: &[AttributeSeed] = &[
    // ---- Identity -------------------------------------------------------
    AttributeSeed {
        id: "ID-01",
        name: "Full name",
        category: AttributeCategory::Identity,
        risk_tier: RiskTier::VeryHigh,
        threshold: 2,
        redaction: RedactionStrategy::Replace,
        replacement: Some("Staff Member"),
        compliance_protected: false,
    },
    AttributeSeed {
        id: "ID-02",
        name: "Photograph",
        category: AttributeCategory::Identity,
        risk_tier: RiskTier::VeryHigh,
        threshold: 2,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: true,
    },
    AttributeSeed {
        id: "ID-03",
        name: "Role title",
        category: AttributeCategory::Identity,
        risk_tier: RiskTier::Medium,
        threshold: 1,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "ID-04",
        name: "Biography",
        category: AttributeCategory::Identity,
        risk_tier: RiskTier::High,
        threshold: 3,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "ID-05",
        name: "Pronouns",
        category: AttributeCategory::Identity,
        risk_tier: RiskTier::Medium,
        threshold: 2,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "ID-06",
        name: "Government identifier",
        category: AttributeCategory::Identity,
        risk_tier: RiskTier::VeryHigh,
        threshold: 4,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: true,
    },
    // ---- Contact --------------------------------------------------------
    AttributeSeed {
        id: "CV-01",
        name: "Work email",
        category: AttributeCategory::Contact,
        risk_tier: RiskTier::High,
        threshold: 4,
        redaction: RedactionStrategy::Replace,
        replacement: Some("Contact the organization"),
        compliance_protected: false,
    },
    AttributeSeed {
        id: "CV-02",
        name: "Phone number",
        category: AttributeCategory::Contact,
        risk_tier: RiskTier::VeryHigh,
        threshold: 4,
        redaction: RedactionStrategy::Replace,
        replacement: Some("Contact the organization"),
        compliance_protected: true,
    },
    AttributeSeed {
        id: "CV-03",
        name: "Mailing address",
        category: AttributeCategory::Contact,
        risk_tier: RiskTier::VeryHigh,
        threshold: 4,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: true,
    },
    AttributeSeed {
        id: "CV-04",
        name: "Social media handle",
        category: AttributeCategory::Contact,
        risk_tier: RiskTier::Medium,
        threshold: 3,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "CV-05",
        name: "Personal website",
        category: AttributeCategory::Contact,
        risk_tier: RiskTier::Low,
        threshold: 2,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    // ---- Organizational -------------------------------------------------
    AttributeSeed {
        id: "OR-01",
        name: "Department",
        category: AttributeCategory::Organizational,
        risk_tier: RiskTier::Low,
        threshold: 1,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "OR-02",
        name: "Team assignment",
        category: AttributeCategory::Organizational,
        risk_tier: RiskTier::Low,
        threshold: 2,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "OR-03",
        name: "Reporting line",
        category: AttributeCategory::Organizational,
        risk_tier: RiskTier::Medium,
        threshold: 3,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "OR-04",
        name: "Office location",
        category: AttributeCategory::Organizational,
        risk_tier: RiskTier::High,
        threshold: 3,
        redaction: RedactionStrategy::Replace,
        replacement: Some("Main office"),
        compliance_protected: false,
    },
    AttributeSeed {
        id: "OR-05",
        name: "Tenure dates",
        category: AttributeCategory::Organizational,
        risk_tier: RiskTier::Medium,
        threshold: 3,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    // ---- Activity -------------------------------------------------------
    AttributeSeed {
        id: "AC-01",
        name: "Project involvement",
        category: AttributeCategory::Activity,
        risk_tier: RiskTier::Medium,
        threshold: 2,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "AC-02",
        name: "Event attendance",
        category: AttributeCategory::Activity,
        risk_tier: RiskTier::High,
        threshold: 3,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "AC-03",
        name: "Publication authorship",
        category: AttributeCategory::Activity,
        risk_tier: RiskTier::Low,
        threshold: 1,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: false,
    },
    AttributeSeed {
        id: "AC-04",
        name: "Travel schedule",
        category: AttributeCategory::Activity,
        risk_tier: RiskTier::VeryHigh,
        threshold: 4,
        redaction: RedactionStrategy::Omit,
        replacement: None,
        compliance_protected: true,
    },
];

struct LevelSeed {
    level: u8,
    name: &'static str,
    description: &'static str,
}

static STANDARD_LEVELS: &[LevelSeed] = &[
    LevelSeed {
        level: 0,
        name: "Minimal",
        description: "Only organization-level information is published.",
    },
    LevelSeed {
        level: 1,
        name: "Restricted",
        description: "Structure and roles are visible; individual identities are withheld.",
    },
    LevelSeed {
        level: 2,
        name: "Standard",
        description: "Names and portraits are visible; personal detail is withheld.",
    },
    LevelSeed {
        level: 3,
        name: "Extended",
        description: "Biographies and activity history are visible.",
    },
    LevelSeed {
        level: 4,
        name: "Full",
        description: "Every catalogued attribute is visible, including direct contact channels.",
    },
];

// ---------------------------------------------------------------------------
// Materialization
// ---------------------------------------------------------------------------

/// Build the default [`AttributeCatalog`] from the seed data.
pub fn default_catalog() -> AttributeCatalog {
    DEFAULT_ATTRIBUTES
        .iter()
        .map(|seed| {
            let definition = AttributeDefinition {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                category: seed.category,
                risk_tier: seed.risk_tier,
                threshold: DisclosureLevel::new(seed.threshold)
                    .expect("built-in catalog thresholds are in range"),
                redaction: seed.redaction,
                replacement: seed.replacement.map(str::to_string),
                compliance_protected: seed.compliance_protected,
            };
            (definition.id.clone(), definition)
        })
        .collect()
}

/// The five standard level definitions.
pub fn default_level_definitions() -> Vec<LevelDefinition> {
    STANDARD_LEVELS
        .iter()
        .map(|seed| LevelDefinition {
            level: DisclosureLevel::new(seed.level)
                .expect("built-in level definitions are in range"),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twenty_unique_entries() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.len(), DEFAULT_ATTRIBUTES.len());
    }

    #[test]
    fn every_category_is_represented() {
        let catalog = default_catalog();
        for category in [
            AttributeCategory::Identity,
            AttributeCategory::Contact,
            AttributeCategory::Organizational,
            AttributeCategory::Activity,
        ] {
            assert!(
                catalog.values().any(|a| a.category == category),
                "no attribute in category {category:?}"
            );
        }
    }

    #[test]
    fn entries_carry_their_own_id_as_key() {
        for (key, attribute) in &default_catalog() {
            assert_eq!(key, &attribute.id);
        }
    }

    #[test]
    fn replace_entries_ship_a_replacement() {
        for attribute in default_catalog().values() {
            if attribute.redaction == RedactionStrategy::Replace {
                assert!(
                    attribute.replacement.is_some(),
                    "default entry {} uses replace without a replacement",
                    attribute.id
                );
            }
        }
    }

    #[test]
    fn scenario_anchored_entries_match_their_documented_rules() {
        let catalog = default_catalog();

        let name = &catalog["ID-01"];
        assert_eq!(name.threshold.value(), 2);
        assert_eq!(name.redaction, RedactionStrategy::Replace);
        assert_eq!(name.replacement.as_deref(), Some("Staff Member"));

        let photo = &catalog["ID-02"];
        assert_eq!(photo.threshold.value(), 2);
        assert_eq!(photo.redaction, RedactionStrategy::Omit);

        assert_eq!(catalog["ID-03"].threshold.value(), 1);
        assert_eq!(catalog["ID-04"].threshold.value(), 3);

        let email = &catalog["CV-01"];
        assert_eq!(email.threshold.value(), 4);
        assert_eq!(email.replacement.as_deref(), Some("Contact the organization"));

        assert_eq!(catalog["OR-01"].threshold.value(), 1);
    }

    #[test]
    fn level_definitions_cover_the_full_range_once() {
        let definitions = default_level_definitions();
        assert_eq!(definitions.len(), 5);
        for (expected, definition) in definitions.iter().enumerate() {
            assert_eq!(definition.level.value(), expected as u8);
            assert!(!definition.name.is_empty());
            assert!(!definition.description.is_empty());
        }
    }
}
