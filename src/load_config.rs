/// `load_config` module: loads and validates a static YAML config into the
/// internal [`Config`].
///
/// This module is the only place where untrusted YAML is parsed and mapped to
/// strongly-typed internal structs.
///
/// # Responsibilities
/// - Parse user-supplied YAML configuration files into type-safe Rust structs
/// - Validate run-level requirements (the question set must be non-empty)
/// - Keep secrets out of the file: backend credentials come from the
///   environment (see [`crate::backend::ChatClient::new_from_env`])
///
/// # Errors
/// All errors in this module use `anyhow::Error` for context-rich
/// diagnostics, and are surfaced at the CLI boundary.
///
/// For the accepted YAML schema, see the README.
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::{default_concurrency, Config};

#[derive(Debug, Deserialize)]
struct RawConfig {
    pipeline: PipelineSection,
    questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PipelineSection {
    content_root: PathBuf,
    summary_root: PathBuf,
    max_content_length: usize,
    #[serde(default = "default_concurrency")]
    concurrency: usize,
}

/// Loads a static YAML config file (no secrets) and validates it.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let raw: RawConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    if raw.questions.is_empty() {
        error!(config_path = ?path_ref, "Config contains no questions");
        return Err(anyhow::anyhow!(
            "Config must declare at least one question"
        ));
    }

    Ok(Config {
        content_root: raw.pipeline.content_root,
        summary_root: raw.pipeline.summary_root,
        max_content_length: raw.pipeline.max_content_length,
        questions: raw.questions,
        concurrency: raw.pipeline.concurrency,
    })
}
