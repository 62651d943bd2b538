//! Append-only artifact registry.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::data::{DataTable, Parser};
use crate::error::{Result, VividhaError};
use crate::model::ArtifactSubmission;

/// Column order of the registry file.
pub const REGISTRY_COLUMNS: [&str; 4] = ["name", "location", "description", "submitted_on"];

/// Writer and reader for the artifact registry file.
///
/// Appends are single-writer: within the server the registry sits behind a
/// lock, and each append is one write of a fully serialized record, so a
/// failure cannot leave a partial row behind. Separate processes racing on
/// the same file are not coordinated.
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    /// A registry stored at `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the registry file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the registry file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one submission, writing the header row only when the file is
    /// being created.
    pub fn append(&self, submission: &ArtifactSubmission) -> Result<()> {
        let write_header = !self.path.exists();

        let mut buffer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if write_header {
            buffer.write_record(REGISTRY_COLUMNS)?;
        }
        let stamp = submission.submitted_on.to_rfc3339();
        buffer.write_record([
            submission.name.as_str(),
            submission.location.as_str(),
            submission.description.as_str(),
            stamp.as_str(),
        ])?;
        let bytes = buffer
            .into_inner()
            .map_err(|e| VividhaError::Registry(format!("failed to flush record: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| VividhaError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        file.write_all(&bytes).map_err(|e| VividhaError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| VividhaError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }

    /// Read the registry back as a table. A registry that does not exist
    /// yet reads as an empty table with the registry columns.
    pub fn load(&self) -> Result<DataTable> {
        if !self.path.exists() {
            return Ok(DataTable::new(
                REGISTRY_COLUMNS.iter().map(|c| c.to_string()).collect(),
                Vec::new(),
                b',',
            ));
        }
        let (table, _) = Parser::new().parse_file(&self.path)?;
        Ok(table)
    }
}
