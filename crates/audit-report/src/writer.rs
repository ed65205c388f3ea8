use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::entry::BuildAuditEntry;

/// Errors that can occur during build-audit I/O.
#[derive(Debug, thiserror::Error)]
pub enum AuditWriteError {
    #[error("failed to create parent directories: {0}")]
    CreateDir(std::io::Error),

    #[error("failed to open build-audit file: {0}")]
    OpenFile(std::io::Error),

    #[error("failed to serialize build-audit entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write to build-audit file: {0}")]
    Write(std::io::Error),
}

/// Append-only file writer that serialises [`BuildAuditEntry`] values as
/// JSON lines.
///
/// Each call to [`write`](Self::write) produces exactly one
/// newline-terminated JSON object in the output file.  Builds are one-shot
/// synchronous processes, so writes go straight to the file with no
/// buffering layer of their own.
pub struct BuildAuditWriter {
    file: File,
}

impl BuildAuditWriter {
    /// Open (or create) the build-audit file at `path` in append mode.
    ///
    /// Parent directories are created automatically if they do not exist.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, AuditWriteError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AuditWriteError::CreateDir)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(AuditWriteError::OpenFile)?;

        Ok(Self { file })
    }

    /// Serialise `entry` as a single JSON line and append it to the file.
    pub fn write(&mut self, entry: &BuildAuditEntry) -> Result<(), AuditWriteError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        self.file.write_all(&line).map_err(AuditWriteError::Write)
    }
}
