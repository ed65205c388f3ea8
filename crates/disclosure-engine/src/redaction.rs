use crate::schema::{AttributeDefinition, RedactionStrategy};

/// The substitute to apply once a field has been ruled hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitute {
    /// Drop the field from the filtered record entirely (key absent).
    Omit,
    /// Keep the field present, replacing its value with the given text.
    Replace(String),
}

/// Resolve the substitute for a hidden attribute.
///
/// Pure and always defined.  The strategy defaults to omission; for the
/// replace strategy the configured replacement text is used, or a generic
/// `"[<name> hidden]"` default is synthesized when none is configured.  The
/// result does not depend on the level: once hidden, the same substitute
/// applies at every level.
pub fn resolve_redaction(attribute: &AttributeDefinition) -> Substitute {
    match attribute.redaction {
        RedactionStrategy::Omit => Substitute::Omit,
        RedactionStrategy::Replace => {
            let value = attribute
                .replacement
                .clone()
                .unwrap_or_else(|| format!("[{} hidden]", attribute.name));
            Substitute::Replace(value)
        }
    }
}
