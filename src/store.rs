//! Read/write view over the summary root: derived artifact paths, the
//! existence check that drives skip logic, and JSON persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::contract::{SourceFile, SummaryRecord};

/// Persists one summary artifact per processed source file, at a path derived
/// deterministically from the source's relative path.
pub struct SummaryStore {
    root: PathBuf,
}

impl SummaryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The derived location for this file's summary: the same relative path
    /// under the summary root, with `.json` appended.
    pub fn summary_path(&self, file: &SourceFile) -> PathBuf {
        let mut name = file
            .relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        name.push_str(".json");
        match file
            .relative_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            Some(parent) => self.root.join(parent).join(name),
            None => self.root.join(name),
        }
    }

    /// Pure existence check: true if a summary artifact is already present
    /// at the derived path. The contents are deliberately not parsed or
    /// validated, so a half-written prior summary still counts as done.
    pub fn exists(&self, file: &SourceFile) -> bool {
        self.summary_path(file).exists()
    }

    /// Serializes the question/answer set to the derived path, creating any
    /// missing intermediate directories. Writes directly to the final path.
    pub fn write(
        &self,
        file: &SourceFile,
        questions: &[String],
        answers: &[String],
    ) -> Result<(), std::io::Error> {
        let path = self.summary_path(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let record = SummaryRecord {
            source: file.relative_path.clone(),
            questions: questions.to_vec(),
            answers: answers.to_vec(),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&path, json)?;
        info!(
            file = %file.relative_path.display(),
            summary = %path.display(),
            "Persisted summary record"
        );
        Ok(())
    }

    /// Reads back an existing summary record.
    pub fn read(&self, file: &SourceFile) -> Result<SummaryRecord, std::io::Error> {
        let path = self.summary_path(file);
        debug!(summary = %path.display(), "Reading summary record");
        let json = fs::read_to_string(&path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
