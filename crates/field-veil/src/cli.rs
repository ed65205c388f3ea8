use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "field-veil",
    version,
    about = "Disclosure-level filtering for structured content records"
)]
pub struct Cli {
    /// Path to the operator configuration file
    #[arg(short, long, default_value = "disclosure.yaml")]
    pub config: PathBuf,

    /// Disclosure level for this build (overrides the FIELD_VEIL_LEVEL
    /// environment variable; invalid values fall back to full disclosure)
    #[arg(short, long)]
    pub level: Option<String>,

    /// Directory containing one JSON records file per collection
    #[arg(long, default_value = "content")]
    pub content_dir: PathBuf,

    /// Directory the filtered records are written to
    #[arg(long, default_value = "dist/content")]
    pub out_dir: PathBuf,

    /// Append build-audit entries to this JSON-lines file
    #[arg(long)]
    pub audit_log: Option<PathBuf>,

    /// Evaluate and report without writing filtered output
    #[arg(long)]
    pub dry_run: bool,
}
