use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::write;
use tempfile::NamedTempFile;

/// Creates a minimal config file for the CLI to read.
fn create_minimal_config() -> NamedTempFile {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(
        config.path(),
        b"pipeline:\n  content_root: ./tmp/docs\n  summary_root: ./tmp/summaries\n  max_content_length: 4000\nquestions:\n  - \"What is this about?\"\n",
    )
    .expect("Writing temp config failed");
    config
}

#[test]
fn run_cli_fails_with_missing_config_file() {
    let mut cmd = Command::cargo_bin("llm-summarise").expect("Binary exists");
    cmd.arg("run").arg("--config").arg("/no/such/config.yaml");
    cmd.assert().failure();
}

#[test]
fn run_cli_fails_without_api_key() {
    let config = create_minimal_config();
    let mut cmd = Command::cargo_bin("llm-summarise").expect("Binary exists");
    cmd.arg("run")
        .arg("--config")
        .arg(config.path())
        .env_remove("OPENAI_API_KEY");
    // Without credentials the backend cannot be constructed; the CLI must
    // exit with an error rather than run a partial pipeline.
    cmd.assert().failure();
}

#[test]
fn help_lists_run_subcommand() {
    let mut cmd = Command::cargo_bin("llm-summarise").expect("Binary exists");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run"));
}

use std::sync::{Arc, Mutex};
use tracing_subscriber::prelude::*; // needed for .with()
use tracing_subscriber::{layer::Context, Layer, Registry};

/// Custom Layer to collect emitted event messages.
struct EventCollector {
    events: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for EventCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        use std::fmt::Write as FmtWrite;
        let mut msg = String::new();
        let _ = write!(&mut msg, "{:?}", event);
        self.events.lock().unwrap().push(msg);
    }
}

#[tokio::test]
async fn emits_trace_initialised_event() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = EventCollector {
        events: events.clone(),
    };
    let subscriber = Registry::default().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    use llm_summarise::cli::{run, Cli, Commands};

    // Provide minimum config for the Run subcommand (using a dummy path).
    let cli = Cli {
        command: Commands::Run {
            config: std::path::PathBuf::from("dummy.yaml"),
        },
    };

    let _ = run(cli).await;

    let event_msgs = events.lock().unwrap();
    assert!(
        event_msgs
            .iter()
            .any(|msg| msg.contains("trace_initialised")),
        "Expected a 'trace_initialised' trace event, got: {:?}",
        event_msgs
    );
}
