use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::redaction::{resolve_redaction, Substitute};
use crate::resolver::DisclosureContext;
use crate::schema::{Record, RedactionStrategy};
use crate::visibility::is_visible;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// The decision trail for a single field of one transformed record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResult {
    pub field: String,
    /// The attribute id the field was mapped to; empty for unmanaged fields.
    pub attribute_id: String,
    pub visible: bool,
    /// The original value when visible, the substitute when replaced, `None`
    /// when the field was omitted.
    pub value: Option<Value>,
    /// The strategy applied when the field was hidden.
    pub redaction: Option<RedactionStrategy>,
}

/// The outcome of transforming one record.
///
/// Every field of the input appears exactly once in `field_results`, in
/// input order, and every input field name is either a key of `filtered` or
/// a member of `hidden_fields` (replaced fields are both: present in the
/// filtered record with their substitute, and counted as hidden).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryResult {
    /// Only visible and substituted fields, in input order.
    pub filtered: Record,
    pub field_results: Vec<FieldResult>,
    /// Names of every field whose visibility decision was "hidden".
    pub hidden_fields: BTreeSet<String>,
    /// Compliance and configuration warnings, in the order raised.
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Entry transform
// ---------------------------------------------------------------------------

/// Filter one record according to the collection's field mapping and the
/// context's disclosure level.
///
/// Fail-open branches, in evaluation order per field:
///
/// 1. The collection has no configuration: the whole record passes through
///    unchanged, every field visible with an empty attribute id.
/// 2. The field is not in the collection's mapping: pass through, empty
///    attribute id.
/// 3. The mapped attribute id is missing from the catalog: pass through
///    visible, with a configuration-error warning naming the field and id.
/// 4. The attribute is known: visibility is decided by
///    [`is_visible`]; hidden fields are omitted or substituted per the
///    attribute's redaction strategy.  Hiding a compliance-protected
///    attribute raises an advisory warning first; the field is hidden
///    regardless.
pub fn transform_entry(collection: &str, record: &Record, ctx: &DisclosureContext) -> EntryResult {
    let Some(config) = ctx.collection(collection) else {
        debug!(collection, "collection has no configuration; record passes through");
        return pass_through(record);
    };

    let mut filtered = Record::new();
    let mut field_results = Vec::with_capacity(record.len());
    let mut hidden_fields = BTreeSet::new();
    let mut warnings = Vec::new();

    for (field, value) in record {
        let Some(attribute_id) = config.field_mapping.get(field) else {
            // Unmanaged field.
            filtered.insert(field.clone(), value.clone());
            field_results.push(visible_result(field, "", value));
            continue;
        };

        let Some(attribute) = ctx.config.catalog.get(attribute_id) else {
            warnings.push(format!(
                "field '{field}' in collection '{collection}' maps to unknown attribute \
                 '{attribute_id}'; passing through unfiltered"
            ));
            filtered.insert(field.clone(), value.clone());
            field_results.push(visible_result(field, attribute_id, value));
            continue;
        };

        if is_visible(attribute_id, ctx.level, &ctx.config.catalog) {
            filtered.insert(field.clone(), value.clone());
            field_results.push(visible_result(field, attribute_id, value));
            continue;
        }

        if attribute.compliance_protected {
            warnings.push(format!(
                "compliance-protected attribute '{}' ({}) is hidden at level {} (visibility \
                 threshold {}); removal requires review",
                attribute.name, attribute.id, ctx.level, attribute.threshold
            ));
        }

        hidden_fields.insert(field.clone());
        match resolve_redaction(attribute) {
            Substitute::Replace(text) => {
                let substitute = Value::String(text);
                filtered.insert(field.clone(), substitute.clone());
                field_results.push(FieldResult {
                    field: field.clone(),
                    attribute_id: attribute_id.clone(),
                    visible: false,
                    value: Some(substitute),
                    redaction: Some(RedactionStrategy::Replace),
                });
            }
            Substitute::Omit => {
                field_results.push(FieldResult {
                    field: field.clone(),
                    attribute_id: attribute_id.clone(),
                    visible: false,
                    value: None,
                    redaction: Some(RedactionStrategy::Omit),
                });
            }
        }
    }

    trace!(
        collection,
        fields = field_results.len(),
        hidden = hidden_fields.len(),
        warnings = warnings.len(),
        "record transformed"
    );

    EntryResult {
        filtered,
        field_results,
        hidden_fields,
        warnings,
    }
}

/// Apply [`transform_entry`] to each record independently, preserving input
/// order.  No record's result depends on any other record's.
pub fn transform_collection(
    collection: &str,
    records: &[Record],
    ctx: &DisclosureContext,
) -> Vec<EntryResult> {
    records
        .iter()
        .map(|record| transform_entry(collection, record, ctx))
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn visible_result(field: &str, attribute_id: &str, value: &Value) -> FieldResult {
    FieldResult {
        field: field.to_string(),
        attribute_id: attribute_id.to_string(),
        visible: true,
        value: Some(value.clone()),
        redaction: None,
    }
}

fn pass_through(record: &Record) -> EntryResult {
    let field_results = record
        .iter()
        .map(|(field, value)| visible_result(field, "", value))
        .collect();

    EntryResult {
        filtered: record.clone(),
        field_results,
        hidden_fields: BTreeSet::new(),
        warnings: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
