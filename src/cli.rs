/// This module implements the CLI interface for llm-summarise — command
/// parsing, argument validation, and the user-visible entrypoint.
///
/// All pipeline logic (stores, prompt construction, the per-file driver)
/// lives in the library modules; this module is strictly CLI glue and
/// orchestration.
///
/// ## Features
/// - Entry struct [`Cli`] defines all user-facing options and subcommands.
/// - Async entrypoint [`run`] for programmatic invocation and integration
///   testing.
/// - Logging, tracing, and structured error output at CLI level.
use crate::backend::ChatClient;
use crate::extract::PlainTextExtractor;
use crate::load_config::load_config;
use crate::summarise::summarise;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for llm-summarise: batch-summarise a directory of documents.
#[derive(Parser)]
#[clap(
    name = "llm-summarise",
    version,
    about = "Summarise a directory of documents into per-file LLM question/answer records"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the summarisation pipeline using the given config file
    Run {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Run { config } => {
            let config = load_config(config)?;
            config.trace_loaded();
            tracing::info!(command = "run", "Starting summarisation run");

            let extractor = PlainTextExtractor;
            let summarizer = ChatClient::new_from_env()
                .map_err(|e| anyhow::anyhow!("Failed to construct completion backend: {e}"))?;

            match summarise(&config, &extractor, &summarizer).await {
                Ok(report) => {
                    for failure in &report.failed {
                        tracing::error!(
                            file = %failure.file.display(),
                            error = %failure.error,
                            "File failed during run"
                        );
                    }
                    println!(
                        "Summarisation complete: {} persisted, {} skipped, {} failed",
                        report.persisted.len(),
                        report.skipped.len(),
                        report.failed.len()
                    );
                    tracing::info!(
                        command = "run",
                        persisted = report.persisted.len(),
                        skipped = report.skipped.len(),
                        failed = report.failed.len(),
                        "Summarisation complete"
                    );
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "run", error = %e, "Summarisation run aborted");
                    Err(anyhow::Error::new(e))
                }
            }
        }
    }
}
