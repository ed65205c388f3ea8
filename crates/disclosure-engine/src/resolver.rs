use tracing::debug;

use crate::catalog::{default_catalog, default_level_definitions};
use crate::level::DisclosureLevel;
use crate::schema::{CollectionConfig, LevelDefinition, OperatorConfig, ResolvedConfig};

/// Merge an operator-supplied partial configuration with the shipped
/// defaults into a fully populated [`ResolvedConfig`].
///
/// This is a pure merge with no hidden external state: the same input always
/// produces the same output.
///
/// * catalog: the default catalog with each operator override replacing the
///   entry of the same id wholesale; overrides with new ids extend the
///   catalog.
/// * level definitions: the operator list when present, else the five
///   standard definitions.
/// * collections: the operator value, unmodified.
pub fn resolve(operator: OperatorConfig) -> ResolvedConfig {
    let mut catalog = default_catalog();
    for attribute in operator.attribute_overrides {
        catalog.insert(attribute.id.clone(), attribute);
    }

    let level_definitions = operator
        .level_definitions
        .unwrap_or_else(default_level_definitions);

    debug!(
        attributes = catalog.len(),
        collections = operator.collections.len(),
        "resolved disclosure configuration"
    );

    ResolvedConfig {
        level_definitions,
        catalog,
        collections: operator.collections,
    }
}

/// The resolved configuration paired with the target disclosure level for
/// one build.
///
/// Created once per build, then passed by shared reference into every
/// transform; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureContext {
    pub level: DisclosureLevel,
    pub config: ResolvedConfig,
}

impl DisclosureContext {
    pub fn new(level: DisclosureLevel, config: ResolvedConfig) -> Self {
        Self { level, config }
    }

    /// Look up the configuration for a named collection, if any.
    pub fn collection(&self, name: &str) -> Option<&CollectionConfig> {
        self.config.collections.get(name)
    }

    /// The level definition matching the active level, if the resolved
    /// definitions cover it.
    pub fn level_definition(&self) -> Option<&LevelDefinition> {
        self.config
            .level_definitions
            .iter()
            .find(|definition| definition.level == self.level)
    }
}
