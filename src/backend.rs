#![doc = "Completion backend for CLI and library: bridges the Summarizer trait abstraction to an OpenAI-compatible chat-completions API."]
//
//! # Completion Backend (CLI <-> Core)
//!
//! This module wires up the [`Summarizer`] trait for real use against a
//! remote chat-completions endpoint, and provides the [`ChatClient`] used by
//! the CLI for networked runs.
//!
//! ## Client Usage
//!
//! - Construct [`ChatClient`] from environment variables (`OPENAI_API_KEY`
//!   required; `OPENAI_API_BASE` and `SUMMARISER_MODEL` optional).
//! - All transport, serialization, and error handling are encapsulated in
//!   the client implementation; the pipeline only sees the trait contract.
//!
//! The model is asked to reply with a numbered list, one answer per question;
//! the reply is split back into per-question answers on those markers.

use async_trait::async_trait;
use std::env;

use crate::contract::{CompletionError, Summarizer};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl ChatClient {
    pub fn new_from_env() -> Result<Self, CompletionError> {
        dotenvy::dotenv().ok(); // loads environment variables from .env if present
        match env::var("OPENAI_API_KEY") {
            Ok(api_key) => {
                let api_base = env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
                let model =
                    env::var("SUMMARISER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
                tracing::info!(
                    api_key_set = !api_key.is_empty(),
                    api_base = %api_base,
                    model = %model,
                    "Initialized ChatClient from environment"
                );
                Ok(ChatClient {
                    http: reqwest::Client::new(),
                    api_key,
                    api_base,
                    model,
                })
            }
            Err(e) => {
                tracing::error!(error = ?e, "OPENAI_API_KEY missing in environment");
                Err(Box::new(e))
            }
        }
    }
}

#[async_trait]
impl Summarizer for ChatClient {
    async fn summarize(
        &self,
        prompt: &str,
        question_count: usize,
    ) -> Result<Vec<String>, CompletionError> {
        tracing::info!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            question_count,
            "Requesting completion"
        );

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(error = ?e, "Completion request failed");
                return Err(Box::new(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to decode response body>"));
            tracing::error!(status = %status, "Completion API returned error. Response body: {text}");
            return Err(format!("completion API error ({status}): {text}").into());
        }

        let payload: serde_json::Value = match response.json().await {
            Ok(val) => val,
            Err(e) => {
                tracing::error!(error = ?e, "Failed to parse completion response JSON");
                return Err(Box::new(e));
            }
        };

        let content = payload
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| -> CompletionError {
                tracing::error!("Completion response missing choices[0].message.content");
                "completion response missing message content".into()
            })?;

        let answers = parse_numbered_answers(content, question_count)?;
        tracing::info!(answers = answers.len(), "Completion succeeded");
        Ok(answers)
    }
}

/// Splits a numbered-list reply into one answer per question.
///
/// Accepts `1.` and `1)` markers at line starts. A reply that does not yield
/// exactly `expected` answers is an error, except for the single-question
/// case, where the whole reply is the answer.
fn parse_numbered_answers(content: &str, expected: usize) -> Result<Vec<String>, CompletionError> {
    let marker = regex::Regex::new(r"(?m)^\s*\d+[.)]\s+")
        .map_err(|e| -> CompletionError { Box::new(e) })?;

    let mut answers: Vec<String> = Vec::new();
    let mut starts: Vec<usize> = marker.find_iter(content).map(|m| m.start()).collect();
    starts.push(content.len());
    for pair in starts.windows(2) {
        let chunk = &content[pair[0]..pair[1]];
        let answer = marker.replace(chunk, "").trim().to_string();
        if !answer.is_empty() {
            answers.push(answer);
        }
    }

    if answers.len() == expected {
        return Ok(answers);
    }
    if expected == 1 {
        // Models often answer a single question without numbering.
        return Ok(vec![content.trim().to_string()]);
    }
    tracing::error!(
        expected,
        got = answers.len(),
        "Model reply did not contain one numbered answer per question"
    );
    Err(format!(
        "expected {expected} numbered answers, model reply contained {}",
        answers.len()
    )
    .into())
}
