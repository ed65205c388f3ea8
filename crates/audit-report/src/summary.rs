use std::collections::BTreeSet;

use serde::Serialize;

use disclosure_engine::{DisclosureContext, DisclosureLevel, EntryResult};

/// Aggregated transform results for one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionAudit {
    pub collection: String,
    pub entry_count: usize,
    /// Total hidden-field occurrences across all entries of the collection.
    pub hidden_field_count: usize,
    /// Distinct names of the fields hidden at least once.
    pub hidden_fields: BTreeSet<String>,
    /// Every warning from every entry, verbatim, in entry order.
    pub warnings: Vec<String>,
}

/// The whole-build audit summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditSummary {
    pub level: DisclosureLevel,
    /// Label of the active level, or `"Unknown"` when the resolved level
    /// definitions do not cover it.
    pub level_name: String,
    pub level_description: String,
    /// Collections with at least one hidden field or warning.
    pub collections: Vec<CollectionAudit>,
    pub total_hidden_fields: usize,
    pub total_warnings: usize,
}

/// Aggregate transform results across collections.
///
/// Collections where nothing was hidden and nothing was warned about are not
/// listed, but their entries still exist unchanged in the input; this is a
/// read-side aggregation only.  A level without a matching definition is
/// reported as `"Unknown"` rather than raising an error.
pub fn summarize(
    results: &[(String, Vec<EntryResult>)],
    ctx: &DisclosureContext,
) -> AuditSummary {
    let mut collections = Vec::new();
    let mut total_hidden_fields = 0;
    let mut total_warnings = 0;

    for (name, entries) in results {
        let hidden_field_count: usize = entries.iter().map(|e| e.hidden_fields.len()).sum();
        let hidden_fields: BTreeSet<String> = entries
            .iter()
            .flat_map(|e| e.hidden_fields.iter().cloned())
            .collect();
        let warnings: Vec<String> = entries
            .iter()
            .flat_map(|e| e.warnings.iter().cloned())
            .collect();

        total_hidden_fields += hidden_field_count;
        total_warnings += warnings.len();

        if hidden_field_count == 0 && warnings.is_empty() {
            continue;
        }

        collections.push(CollectionAudit {
            collection: name.clone(),
            entry_count: entries.len(),
            hidden_field_count,
            hidden_fields,
            warnings,
        });
    }

    let (level_name, level_description) = match ctx.level_definition() {
        Some(definition) => (definition.name.clone(), definition.description.clone()),
        None => ("Unknown".to_string(), String::new()),
    };

    AuditSummary {
        level: ctx.level,
        level_name,
        level_description,
        collections,
        total_hidden_fields,
        total_warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use disclosure_engine::{
        resolve, transform_collection, CollectionConfig, FieldMapping, OperatorConfig, Record,
    };

    fn staff_context(level: u8) -> DisclosureContext {
        let mut mapping = FieldMapping::new();
        mapping.insert("name".to_string(), "ID-01".to_string());
        mapping.insert("bio".to_string(), "ID-04".to_string());
        mapping.insert("photo".to_string(), "ID-02".to_string());

        let operator = OperatorConfig {
            level_definitions: None,
            attribute_overrides: Vec::new(),
            collections: [(
                "staff".to_string(),
                CollectionConfig {
                    field_mapping: mapping,
                },
            )]
            .into_iter()
            .collect(),
        };

        DisclosureContext::new(DisclosureLevel::new(level).unwrap(), resolve(operator))
    }

    fn staff_record(name: &str) -> Record {
        let mut record = Record::new();
        record.insert("name".to_string(), json!(name));
        record.insert("bio".to_string(), json!("A biography."));
        record.insert("photo".to_string(), json!("/photo.jpg"));
        record
    }

    fn results_at(level: u8, records: &[Record]) -> (Vec<(String, Vec<EntryResult>)>, DisclosureContext) {
        let ctx = staff_context(level);
        let entries = transform_collection("staff", records, &ctx);
        (vec![("staff".to_string(), entries)], ctx)
    }

    #[test]
    fn counts_hidden_fields_across_entries() {
        // Level 1: name (replace), bio (omit), and photo (omit) are all
        // hidden in each of the two records.
        let records = vec![staff_record("Jane Smith"), staff_record("Ana Reyes")];
        let (results, ctx) = results_at(1, &records);

        let summary = summarize(&results, &ctx);
        assert_eq!(summary.collections.len(), 1);

        let audit = &summary.collections[0];
        assert_eq!(audit.collection, "staff");
        assert_eq!(audit.entry_count, 2);
        assert_eq!(audit.hidden_field_count, 6);

        let names: Vec<&str> = audit.hidden_fields.iter().map(String::as_str).collect();
        assert_eq!(names, ["bio", "name", "photo"]);

        assert_eq!(summary.total_hidden_fields, 6);
    }

    #[test]
    fn quiet_collections_are_not_listed() {
        let records = vec![staff_record("Jane Smith")];
        let (results, ctx) = results_at(4, &records);

        let summary = summarize(&results, &ctx);
        assert!(summary.collections.is_empty());
        assert_eq!(summary.total_hidden_fields, 0);
        assert_eq!(summary.total_warnings, 0);
    }

    #[test]
    fn compliance_warnings_are_collected_verbatim() {
        // ID-02 (photograph) is compliance-protected in the default catalog;
        // hiding it at level 1 raises one warning per record.
        let records = vec![staff_record("Jane Smith"), staff_record("Ana Reyes")];
        let (results, ctx) = results_at(1, &records);

        let summary = summarize(&results, &ctx);
        let audit = &summary.collections[0];
        assert_eq!(audit.warnings.len(), 2);
        assert!(audit.warnings[0].contains("Photograph"));
        assert_eq!(audit.warnings[0], audit.warnings[1]);
        assert_eq!(summary.total_warnings, 2);
    }

    #[test]
    fn active_level_label_is_resolved() {
        let (results, ctx) = results_at(2, &[staff_record("Jane Smith")]);
        let summary = summarize(&results, &ctx);
        assert_eq!(summary.level.value(), 2);
        assert_eq!(summary.level_name, "Standard");
        assert!(!summary.level_description.is_empty());
    }

    #[test]
    fn missing_level_definition_falls_back_to_unknown() {
        let mut mapping = FieldMapping::new();
        mapping.insert("name".to_string(), "ID-01".to_string());
        let operator = OperatorConfig {
            // Overridden definitions that do not cover the active level.
            level_definitions: Some(Vec::new()),
            attribute_overrides: Vec::new(),
            collections: [(
                "staff".to_string(),
                CollectionConfig {
                    field_mapping: mapping,
                },
            )]
            .into_iter()
            .collect(),
        };
        let ctx = DisclosureContext::new(DisclosureLevel::new(2).unwrap(), resolve(operator));

        let summary = summarize(&[], &ctx);
        assert_eq!(summary.level_name, "Unknown");
        assert_eq!(summary.level_description, "");
    }

    #[test]
    fn multiple_collections_are_totalled() {
        let ctx = staff_context(1);
        let staff_entries = transform_collection("staff", &[staff_record("Jane Smith")], &ctx);
        // An unconfigured collection contributes nothing.
        let board_entries =
            transform_collection("board", &[staff_record("Sam Okafor")], &ctx);

        let results = vec![
            ("staff".to_string(), staff_entries),
            ("board".to_string(), board_entries),
        ];
        let summary = summarize(&results, &ctx);

        assert_eq!(summary.collections.len(), 1);
        assert_eq!(summary.total_hidden_fields, 3);
    }
}
