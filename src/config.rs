use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the source documents to summarise.
    pub content_root: PathBuf,
    /// Directory to persist summary records under.
    pub summary_root: PathBuf,
    /// Maximum number of characters of extracted text to embed in a prompt.
    pub max_content_length: usize,
    /// Ordered, non-empty set of questions to ask about each document.
    pub questions: Vec<String>,
    /// Upper bound on files processed concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

pub fn default_concurrency() -> usize {
    4
}

impl Config {
    pub fn trace_loaded(&self) {
        info!(
            content_root = %self.content_root.display(),
            summary_root = %self.summary_root.display(),
            max_content_length = self.max_content_length,
            questions_count = self.questions.len(),
            concurrency = self.concurrency,
            "Loaded Config"
        );
        debug!(?self, "Config loaded (full debug)");
    }
}
