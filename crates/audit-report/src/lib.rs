//! Build-level audit aggregation for field-veil.
//!
//! This crate is the read side of a build: it rolls per-record
//! [`EntryResult`](disclosure_engine::EntryResult) values up into an
//! [`AuditSummary`], renders that summary as a plain-text report for build
//! logs, and optionally appends structured [`BuildAuditEntry`] events to a
//! [JSON Lines](https://jsonlines.org/) file so builds can be shipped,
//! parsed, and replayed.
//!
//! Aggregation never alters the transform results it reads.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use audit_report::{BuildAuditEntry, BuildAuditWriter, BuildEventType};
//!
//! # fn example() -> Result<(), audit_report::AuditWriteError> {
//! let mut writer = BuildAuditWriter::create("dist/build-audit.jsonl")?;
//! writer.write(&BuildAuditEntry::new(
//!     BuildEventType::BuildStarted,
//!     serde_json::json!({"level": 2}),
//! ))?;
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod render;
pub mod summary;
pub mod writer;

// Re-export primary public types at the crate root for convenience.
pub use entry::{BuildAuditEntry, BuildEventType};
pub use render::render;
pub use summary::{summarize, AuditSummary, CollectionAudit};
pub use writer::{AuditWriteError, BuildAuditWriter};
