//! # disclosure-engine
//!
//! Core decision logic for field-veil.  This crate holds the attribute
//! sensitivity catalog, merges operator configuration against the shipped
//! defaults, and filters structured content records down to what a given
//! disclosure level permits, emitting a per-field audit trail alongside the
//! filtered record.
//!
//! Every operation here is a synchronous pure function over immutable
//! inputs: the resolved configuration is built once per build and shared by
//! reference into every transform.  Unknown attributes, unmapped fields, and
//! unconfigured collections all pass through visible; problems surface as
//! warnings in the result values, never as errors.
//!
//! ## Quick start
//!
//! ```rust
//! use disclosure_engine::{
//!     resolve, transform_entry, CollectionConfig, DisclosureContext, DisclosureLevel,
//!     FieldMapping, OperatorConfig, Record,
//! };
//!
//! let mut fields = FieldMapping::new();
//! fields.insert("name".to_string(), "ID-01".to_string());
//!
//! let operator = OperatorConfig {
//!     level_definitions: None,
//!     attribute_overrides: Vec::new(),
//!     collections: [("staff".to_string(), CollectionConfig { field_mapping: fields })]
//!         .into_iter()
//!         .collect(),
//! };
//!
//! let context = DisclosureContext::new(DisclosureLevel::new(1).unwrap(), resolve(operator));
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), "Jane Smith".into());
//!
//! let result = transform_entry("staff", &record, &context);
//! assert_eq!(result.filtered["name"], "Staff Member");
//! ```

mod catalog;
mod level;
mod redaction;
mod resolver;
mod schema;
mod transform;
mod visibility;

// Re-export primary public API at crate root.
pub use catalog::{default_catalog, default_level_definitions};
pub use level::DisclosureLevel;
pub use redaction::{resolve_redaction, Substitute};
pub use resolver::{resolve, DisclosureContext};
pub use schema::{
    AttributeCatalog, AttributeCategory, AttributeDefinition, CollectionConfig, FieldMapping,
    LevelDefinition, OperatorConfig, Record, RedactionStrategy, ResolvedConfig, RiskTier,
};
pub use transform::{transform_collection, transform_entry, EntryResult, FieldResult};
pub use visibility::is_visible;
