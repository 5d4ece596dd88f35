//! High-level pipeline: orchestrates discover → skip-check → extract →
//! prompt → summarise → persist for every file under the content root.
//!
//! Each file is an independent unit of work with no ordering requirement, so
//! the driver dispatches them over a bounded worker pool. A bad content root
//! or an empty question set aborts the run before any file work; every other
//! failure is per-file, recorded in the report and logged, and the run
//! continues with the remaining files.
//!
//! # Major Types
//! - [`RunReport`]: per-outcome tally for a completed run
//! - [`FileError`]: the per-file failure taxonomy
//!
//! # Navigation
//! - Main entrypoint: [`summarise`]

use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::Config;
use crate::content::{ConfigurationError, ContentStore};
use crate::contract::{Extractor, SourceFile, Summarizer};
use crate::prompt::build_prompt;
use crate::store::SummaryStore;

/// Per-file failure taxonomy. None of these stop the run.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("extraction failed: {0}")]
    Extraction(crate::contract::ExtractError),
    #[error("completion failed: {0}")]
    Completion(crate::contract::CompletionError),
    #[error("summariser returned {got} answers for {expected} questions")]
    Protocol { expected: usize, got: usize },
    #[error("failed to write summary: {0}")]
    Store(#[from] std::io::Error),
}

/// A recorded per-file failure: the failing file's identity and error kind.
#[derive(Debug)]
pub struct FileFailure {
    pub file: PathBuf,
    pub error: FileError,
}

/// Outcome tally for one pipeline run.
#[derive(Debug)]
pub struct RunReport {
    pub run_id: Uuid,
    pub persisted: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FileFailure>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            persisted: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Terminal state for one file.
enum FileOutcome {
    Skipped,
    Persisted,
    Failed(FileError),
}

/// Entrypoint: summarise every eligible file under the content root.
///
/// Returns `Err` only for fatal configuration problems; per-file failures
/// are collected in the returned [`RunReport`].
pub async fn summarise<E, S>(
    config: &Config,
    extractor: &E,
    summarizer: &S,
) -> Result<RunReport, ConfigurationError>
where
    E: Extractor,
    S: Summarizer,
{
    if config.questions.is_empty() {
        return Err(ConfigurationError::NoQuestions);
    }

    let content = ContentStore::new(&config.content_root);
    let store = SummaryStore::new(&config.summary_root);
    let files = content.list_files()?;

    let mut report = RunReport::new();
    info!(
        run_id = %report.run_id,
        content_root = %config.content_root.display(),
        summary_root = %config.summary_root.display(),
        files = files.len(),
        questions = config.questions.len(),
        "Starting summarisation run"
    );

    let concurrency = config.concurrency.max(1);
    let outcomes: Vec<(SourceFile, FileOutcome)> = stream::iter(
        files
            .into_iter()
            .map(|file| process_file(file, config, &store, extractor, summarizer)),
    )
    .buffer_unordered(concurrency)
    .collect()
    .await;

    for (file, outcome) in outcomes {
        match outcome {
            FileOutcome::Skipped => report.skipped.push(file.relative_path),
            FileOutcome::Persisted => report.persisted.push(file.relative_path),
            FileOutcome::Failed(error) => report.failed.push(FileFailure {
                file: file.relative_path,
                error,
            }),
        }
    }

    info!(
        run_id = %report.run_id,
        persisted = report.persisted.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "Summarisation run complete"
    );
    Ok(report)
}

/// Runs one file through the per-file state machine:
/// skip-check → extract → prompt → summarise → persist.
async fn process_file<E, S>(
    file: SourceFile,
    config: &Config,
    store: &SummaryStore,
    extractor: &E,
    summarizer: &S,
) -> (SourceFile, FileOutcome)
where
    E: Extractor,
    S: Summarizer,
{
    if store.exists(&file) {
        info!(file = %file.relative_path.display(), "Summary already exists, skipping");
        return (file, FileOutcome::Skipped);
    }

    let text = match extractor.extract(&file).await {
        Ok(text) => text,
        Err(e) => {
            error!(file = %file.relative_path.display(), error = %e, "Extraction failed");
            return (file, FileOutcome::Failed(FileError::Extraction(e)));
        }
    };

    let prompt = build_prompt(&text, config.max_content_length, &config.questions);

    let answers = match summarizer
        .summarize(&prompt, config.questions.len())
        .await
    {
        Ok(answers) => answers,
        Err(e) => {
            error!(file = %file.relative_path.display(), error = %e, "Completion failed");
            return (file, FileOutcome::Failed(FileError::Completion(e)));
        }
    };

    if answers.len() != config.questions.len() {
        error!(
            file = %file.relative_path.display(),
            expected = config.questions.len(),
            got = answers.len(),
            "Answer count does not match question count"
        );
        return (
            file,
            FileOutcome::Failed(FileError::Protocol {
                expected: config.questions.len(),
                got: answers.len(),
            }),
        );
    }

    if let Err(e) = store.write(&file, &config.questions, &answers) {
        error!(file = %file.relative_path.display(), error = %e, "Failed to persist summary");
        return (file, FileOutcome::Failed(FileError::Store(e)));
    }

    (file, FileOutcome::Persisted)
}
