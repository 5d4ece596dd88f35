//! # contract: collaborator interfaces for the summarisation pipeline
//!
//! This module defines the two external capabilities the pipeline composes —
//! text extraction and LLM completion — as async traits, plus the shared data
//! types that flow between the pipeline's components.
//!
//! ## Interface & Extensibility
//! - Implement [`Extractor`] to plug in a new way of turning a source file
//!   into text (the crate ships [`crate::extract::PlainTextExtractor`]).
//! - Implement [`Summarizer`] to plug in a new completion backend (the crate
//!   ships [`crate::backend::ChatClient`]).
//! - All methods are async, returning results and using boxed error types.
//!
//! ## Mocking & Testing
//! - Both traits are annotated for `mockall` so consumers can generate
//!   deterministic mocks for unit/integration tests. The mocks are exported
//!   behind the default-on `test-export-mocks` feature.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

/// A regular file discovered under the content root.
///
/// The relative path is the file's identity: it determines the derived
/// location of its summary artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the content root.
    pub relative_path: PathBuf,
    /// Absolute location on disk.
    pub absolute_path: PathBuf,
    /// Size in bytes at discovery time.
    pub size: u64,
}

/// The persisted summary artifact for one source file.
///
/// Questions and answers are parallel lists: `answers[i]` answers
/// `questions[i]`. Created exactly once per source file; existence alone
/// marks completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Relative path of the source file this record was derived from.
    pub source: PathBuf,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

/// Error type for the Extractor trait (simple boxed error for now).
pub type ExtractError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for the Summarizer trait (simple boxed error for now).
pub type CompletionError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for extracting textual content from a source file.
///
/// Implementations must be pure with respect to pipeline state: they read the
/// file but never mutate it or the summary store. A failure to produce
/// UTF-8 text is an error, not a panic.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract the file's textual content.
    async fn extract(&self, file: &SourceFile) -> Result<String, ExtractError>;
}

/// Trait for answering a prompt's questions via a completion backend.
///
/// The sole contract is alignment: the returned answers must match the number
/// and order of the questions embedded in the prompt. The driver verifies the
/// count and treats a mismatch as a protocol failure. Authentication, model
/// selection and timeouts are the implementor's concern.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Answer the prompt, returning one answer per question, in order.
    async fn summarize(
        &self,
        prompt: &str,
        question_count: usize,
    ) -> Result<Vec<String>, CompletionError>;
}
