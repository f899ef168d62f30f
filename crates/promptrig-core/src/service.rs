//! Prompt execution service.
//!
//! Orchestrates the runner port and the metric extractor into one reply per
//! request: validate, invoke, classify the outcome, clean the display text.
//! Per request the lifecycle is
//! Idle -> Spawning -> Running -> {Succeeded | TimedOut | ExitedNonZero |
//! SpawnFailed} -> Finalized; nothing is retried, and a failed invocation
//! never affects later ones.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::{PromptReply, PromptRequest, RawOutput};
use crate::metrics::{clean_response, extract_metrics};
use crate::ports::{CliInvocation, PromptRunnerPort, RunnerError};

/// Substring the CLI prints on stderr when the requested model is unknown.
/// Checked case-sensitively, on stderr only, whatever the exit code was -
/// the CLI has been seen reporting this with an ambiguous status.
const MODEL_NOT_FOUND_MARKER: &str = "not found";

/// Failures of one prompt execution, surfaced to the boundary untouched.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Blank model or prompt; rejected before any subprocess is spawned.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The CLI reported the model as unknown. Distinct so the boundary can
    /// prompt for model selection instead of showing a generic failure.
    #[error("Model '{0}' not found")]
    ModelNotFound(String),

    /// Subprocess failure (spawn, non-zero exit, timeout, admission).
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

/// Service that turns a [`PromptRequest`] into a [`PromptReply`].
pub struct PromptService {
    runner: Arc<dyn PromptRunnerPort>,
}

impl PromptService {
    /// Create a new service over a runner implementation.
    pub fn new(runner: Arc<dyn PromptRunnerPort>) -> Self {
        Self { runner }
    }

    /// Execute one prompt against a local model.
    ///
    /// Metrics are always extracted from the raw unfiltered output, so
    /// the display filter can never hide a counter from the map.
    pub async fn execute(&self, request: PromptRequest) -> Result<PromptReply, PromptError> {
        let model = request.model.trim();
        let prompt = request.prompt.trim();
        if model.is_empty() {
            return Err(PromptError::Validation("model must not be blank".to_string()));
        }
        if prompt.is_empty() {
            return Err(PromptError::Validation("prompt must not be blank".to_string()));
        }

        debug!(model = %model, prompt_chars = prompt.len(), "Executing prompt");

        let raw = match self.runner.run(CliInvocation::for_prompt(model, prompt)).await {
            Ok(raw) => raw,
            Err(RunnerError::Exit { ref stderr, .. })
                if stderr.contains(MODEL_NOT_FOUND_MARKER) =>
            {
                return Err(PromptError::ModelNotFound(model.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if raw.stderr.contains(MODEL_NOT_FOUND_MARKER) {
            return Err(PromptError::ModelNotFound(model.to_string()));
        }

        Ok(reply_from(&raw))
    }
}

fn reply_from(raw: &RawOutput) -> PromptReply {
    let combined = raw.combined();
    PromptReply {
        metrics: extract_metrics(&combined),
        response: clean_response(&combined),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Hand-rolled runner mock with a spawn-count probe.
    struct ScriptedRunner {
        spawned: AtomicUsize,
        last_invocation: Mutex<Option<CliInvocation>>,
        outcome: Box<dyn Fn() -> Result<RawOutput, RunnerError> + Send + Sync>,
    }

    impl ScriptedRunner {
        fn new(
            outcome: impl Fn() -> Result<RawOutput, RunnerError> + Send + Sync + 'static,
        ) -> Arc<Self> {
            Arc::new(Self {
                spawned: AtomicUsize::new(0),
                last_invocation: Mutex::new(None),
                outcome: Box::new(outcome),
            })
        }

        fn spawn_count(&self) -> usize {
            self.spawned.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PromptRunnerPort for ScriptedRunner {
        async fn run(&self, invocation: CliInvocation) -> Result<RawOutput, RunnerError> {
            self.spawned.fetch_add(1, Ordering::SeqCst);
            *self.last_invocation.lock().unwrap() = Some(invocation);
            (self.outcome)()
        }
    }

    fn ok_output(stdout: &str, stderr: &str) -> RawOutput {
        RawOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[tokio::test]
    async fn blank_model_is_rejected_without_spawning() {
        let runner = ScriptedRunner::new(|| Ok(RawOutput::default()));
        let service = PromptService::new(runner.clone());

        let err = service
            .execute(PromptRequest::new("  ", "hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::Validation(_)));
        assert_eq!(runner.spawn_count(), 0);
    }

    #[tokio::test]
    async fn whitespace_prompt_is_rejected_without_spawning() {
        let runner = ScriptedRunner::new(|| Ok(RawOutput::default()));
        let service = PromptService::new(runner.clone());

        let err = service
            .execute(PromptRequest::new("llama3", " \t\n"))
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::Validation(_)));
        assert_eq!(runner.spawn_count(), 0);
    }

    #[tokio::test]
    async fn invocation_follows_the_cli_contract() {
        let runner = ScriptedRunner::new(|| Ok(ok_output("hi\n", "")));
        let service = PromptService::new(runner.clone());

        service
            .execute(PromptRequest::new("llama3:8b", "why?"))
            .await
            .unwrap();

        let invocation = runner.last_invocation.lock().unwrap().take().unwrap();
        assert_eq!(invocation.args, ["run", "llama3:8b", "--verbose", "why?"]);
        assert_eq!(runner.spawn_count(), 1);
    }

    #[tokio::test]
    async fn reply_splits_prose_from_metrics() {
        let runner = ScriptedRunner::new(|| {
            Ok(ok_output(
                "Hello world\n",
                "total duration: 1.2s\neval rate: 42 tokens/s\n",
            ))
        });
        let service = PromptService::new(runner);

        let reply = service
            .execute(PromptRequest::new("llama3", "greet me"))
            .await
            .unwrap();
        assert_eq!(reply.response, "Hello world");
        assert_eq!(reply.metrics["total_duration"], "1.2s");
        assert_eq!(reply.metrics["eval_rate"], "42 tokens/s");
    }

    #[tokio::test]
    async fn stderr_not_found_wins_even_on_clean_exit() {
        let runner =
            ScriptedRunner::new(|| Ok(ok_output("", "Error: model 'nope' not found\n")));
        let service = PromptService::new(runner);

        let err = service
            .execute(PromptRequest::new("nope", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::ModelNotFound(ref m) if m == "nope"));
    }

    #[tokio::test]
    async fn stderr_not_found_wins_over_nonzero_exit() {
        let runner = ScriptedRunner::new(|| {
            Err(RunnerError::Exit {
                code: Some(1),
                stderr: "pulling manifest\nmodel 'nope' not found\n".to_string(),
            })
        });
        let service = PromptService::new(runner);

        let err = service
            .execute(PromptRequest::new("nope", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, PromptError::ModelNotFound(_)));
    }

    #[tokio::test]
    async fn plain_nonzero_exit_surfaces_code_and_stderr() {
        let runner = ScriptedRunner::new(|| {
            Err(RunnerError::Exit {
                code: Some(7),
                stderr: "boom\n".to_string(),
            })
        });
        let service = PromptService::new(runner);

        let err = service
            .execute(PromptRequest::new("llama3", "hi"))
            .await
            .unwrap_err();
        match err {
            PromptError::Runner(RunnerError::Exit { code, stderr }) => {
                assert_eq!(code, Some(7));
                assert_eq!(stderr, "boom\n");
            }
            other => panic!("expected exit error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeout_propagates_untouched() {
        let runner = ScriptedRunner::new(|| Err(RunnerError::Timeout { limit_secs: 30 }));
        let service = PromptService::new(runner);

        let err = service
            .execute(PromptRequest::new("llama3", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PromptError::Runner(RunnerError::Timeout { limit_secs: 30 })
        ));
    }

    #[tokio::test]
    async fn empty_non_metric_output_yields_empty_response() {
        let runner =
            ScriptedRunner::new(|| Ok(ok_output("", "total duration: 900ms\n")));
        let service = PromptService::new(runner);

        let reply = service
            .execute(PromptRequest::new("llama3", "hi"))
            .await
            .unwrap();
        assert_eq!(reply.response, "");
        assert_eq!(reply.metrics["total_duration"], "900ms");
    }
}
