#![doc = "llm-summarise: batch pipeline turning a directory of documents into per-file LLM question/answer summaries."]

//! Each file under the content root is processed exactly once: if a summary
//! artifact already exists for it, the file is skipped; otherwise its text is
//! extracted, embedded (possibly truncated) in a prompt with a fixed ordered
//! question set, answered by a completion backend, and persisted as JSON
//! under the summary root. Re-runs are idempotent no-ops for completed files.
//!
//! # Usage
//! The CLI lives in [`cli`]; library consumers call
//! [`summarise::summarise`] with their own [`contract::Extractor`] and
//! [`contract::Summarizer`] implementations.

pub mod backend;
pub mod cli;
pub mod config;
pub mod content;
pub mod contract;
pub mod extract;
pub mod load_config;
pub mod prompt;
pub mod store;
pub mod summarise;

pub use cli::{run, Cli, Commands};
