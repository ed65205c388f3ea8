mod cli;
mod config;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use audit_report::{render, summarize, BuildAuditEntry, BuildAuditWriter, BuildEventType};
use disclosure_engine::{
    resolve, transform_collection, DisclosureContext, DisclosureLevel, EntryResult, Record,
};

use crate::cli::Cli;

/// Environment variable consulted when no --level flag is given.
const LEVEL_ENV_VAR: &str = "FIELD_VEIL_LEVEL";

fn main() -> Result<()> {
    // 1. Parse CLI args.
    let cli = Cli::parse();

    // 2. Init tracing.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    // 3. Load and resolve the operator configuration.
    let operator = config::load(&cli.config)?;
    let resolved = resolve(operator);

    // 4. Resolve the disclosure level: flag, then environment, then full
    //    disclosure.  Invalid input warns and falls back rather than
    //    failing the build.
    let raw_level = cli
        .level
        .clone()
        .or_else(|| std::env::var(LEVEL_ENV_VAR).ok());
    let level = match &raw_level {
        Some(input) => DisclosureLevel::parse(input, DisclosureLevel::MAX),
        None => DisclosureLevel::MAX,
    };

    let context = DisclosureContext::new(level, resolved);

    info!(
        config = %cli.config.display(),
        level = %level,
        collections = context.config.collections.len(),
        "field-veil starting"
    );

    // 5. Open the build-audit writer, if requested.
    let mut audit = match &cli.audit_log {
        Some(path) => {
            Some(BuildAuditWriter::create(path).context("failed to open build-audit log")?)
        }
        None => None,
    };

    log_audit(
        &mut audit,
        BuildAuditEntry::new(
            BuildEventType::BuildStarted,
            serde_json::json!({
                "level": level.value(),
                "config": cli.config.display().to_string(),
            }),
        ),
    );

    if let Some(input) = raw_level
        .as_deref()
        .filter(|input| DisclosureLevel::try_parse(input).is_none())
    {
        log_audit(
            &mut audit,
            BuildAuditEntry::new(
                BuildEventType::InvalidLevelInput,
                serde_json::json!({
                    "input": input,
                    "fallback": level.value(),
                }),
            ),
        );
    }

    // 6. Transform every configured collection.
    let mut results: Vec<(String, Vec<EntryResult>)> = Vec::new();
    for name in context.config.collections.keys() {
        let records_path = cli.content_dir.join(format!("{name}.json"));
        if !records_path.exists() {
            warn!(
                collection = %name,
                path = %records_path.display(),
                "no records file for collection; skipping"
            );
            continue;
        }

        let records = read_records(&records_path)
            .with_context(|| format!("failed to load records for collection '{name}'"))?;
        let entry_results = transform_collection(name, &records, &context);

        info!(
            collection = %name,
            entries = entry_results.len(),
            hidden = entry_results.iter().map(|e| e.hidden_fields.len()).sum::<usize>(),
            "collection filtered"
        );

        if !cli.dry_run {
            write_filtered(&cli.out_dir, name, &entry_results)
                .with_context(|| format!("failed to write filtered records for '{name}'"))?;
        }

        log_audit(
            &mut audit,
            BuildAuditEntry::new(
                BuildEventType::CollectionFiltered,
                serde_json::json!({
                    "collection": name,
                    "entries": entry_results.len(),
                    "hidden_fields": entry_results
                        .iter()
                        .map(|e| e.hidden_fields.len())
                        .sum::<usize>(),
                    "warnings": entry_results
                        .iter()
                        .map(|e| e.warnings.len())
                        .sum::<usize>(),
                }),
            ),
        );

        results.push((name.clone(), entry_results));
    }

    // 7. Aggregate and print the audit report.
    let summary = summarize(&results, &context);
    println!("{}", render(&summary));

    log_audit(
        &mut audit,
        BuildAuditEntry::new(
            BuildEventType::BuildCompleted,
            serde_json::json!({
                "total_hidden_fields": summary.total_hidden_fields,
                "total_warnings": summary.total_warnings,
            }),
        ),
    );

    Ok(())
}

/// Read one collection's records from a JSON array file.
fn read_records(path: &Path) -> Result<Vec<Record>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records file: {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse records file: {}", path.display()))?;
    Ok(records)
}

/// Write the filtered records of one collection as a pretty-printed JSON
/// array, mirroring the input layout.
fn write_filtered(out_dir: &Path, collection: &str, results: &[EntryResult]) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let filtered: Vec<&Record> = results.iter().map(|result| &result.filtered).collect();
    let json = serde_json::to_string_pretty(&filtered).context("failed to serialize records")?;

    let path = out_dir.join(format!("{collection}.json"));
    std::fs::write(&path, json)
        .with_context(|| format!("failed to write filtered records: {}", path.display()))?;
    Ok(())
}

/// Best-effort audit logging: a failed audit write warns, it never fails the
/// build.
fn log_audit(writer: &mut Option<BuildAuditWriter>, entry: BuildAuditEntry) {
    if let Some(writer) = writer {
        if let Err(err) = writer.write(&entry) {
            warn!(%err, "failed to write build-audit entry");
        }
    }
}
