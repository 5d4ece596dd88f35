//! Read-only view over the content root: recursive enumeration of the
//! regular files that are eligible for summarisation.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::contract::SourceFile;

/// Fatal, run-level configuration failure. Anything per-file is handled by
/// the driver instead.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("content root '{0}' does not exist")]
    MissingRoot(PathBuf),
    #[error("content root '{0}' is not a directory")]
    NotADirectory(PathBuf),
    #[error("question set must not be empty")]
    NoQuestions,
}

/// Enumerates eligible files under a content root.
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recursively lists all regular files under the root.
    ///
    /// Directories, symlinks and other non-regular entries are excluded.
    /// Traversal order is whatever the filesystem yields; callers must not
    /// rely on it. A missing or non-directory root fails the run; individual
    /// unreadable entries are logged and skipped.
    pub fn list_files(&self) -> Result<Vec<SourceFile>, ConfigurationError> {
        if !self.root.exists() {
            return Err(ConfigurationError::MissingRoot(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfigurationError::NotADirectory(self.root.clone()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = ?e, "Skipping unreadable entry during content scan");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let absolute_path = entry.path().to_path_buf();
            // strip_prefix cannot fail: every entry is under the root we walked.
            let relative_path = match absolute_path.strip_prefix(&self.root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            debug!(file = %relative_path.display(), size, "Discovered source file");
            files.push(SourceFile {
                relative_path,
                absolute_path,
                size,
            });
        }

        debug!(
            root = %self.root.display(),
            count = files.len(),
            "Content scan complete"
        );
        Ok(files)
    }
}
