//! Plain-text rendering of an [`AuditSummary`] for build logs.
//!
//! The exact layout is not a stable interface, but consumers grep for the
//! level number, the level name, per-collection hidden counts, and warning
//! text, so those always appear verbatim.

use crate::summary::AuditSummary;

/// Render a summary as a human-readable, greppable report.
pub fn render(summary: &AuditSummary) -> String {
    let mut out = String::new();

    out.push_str("disclosure audit report\n");
    out.push_str(&format!(
        "level: {} ({})\n",
        summary.level, summary.level_name
    ));
    if !summary.level_description.is_empty() {
        out.push_str(&format!("description: {}\n", summary.level_description));
    }

    if summary.collections.is_empty() {
        out.push_str("\nno fields were hidden and no warnings were raised\n");
        return out;
    }

    for audit in &summary.collections {
        out.push_str(&format!(
            "\ncollection '{}': {} entries, {} hidden fields\n",
            audit.collection, audit.entry_count, audit.hidden_field_count
        ));

        if !audit.hidden_fields.is_empty() {
            let names: Vec<&str> = audit.hidden_fields.iter().map(String::as_str).collect();
            out.push_str(&format!("  hidden fields: {}\n", names.join(", ")));
        }

        for warning in &audit.warnings {
            out.push_str(&format!("  warning: {warning}\n"));
        }
    }

    out.push_str(&format!(
        "\ntotal hidden fields: {}\ntotal warnings: {}\n",
        summary.total_hidden_fields, summary.total_warnings
    ));

    out
}
