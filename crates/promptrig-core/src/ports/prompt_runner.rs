//! Prompt runner trait definition.
//!
//! This port abstracts the inference subprocess: implementations own the
//! binary path, spawning, output capture, the execution timeout, and
//! admission control. The core builds the argument list and interprets the
//! captured output.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::RawOutput;

/// Argument list for one inference CLI invocation.
///
/// Each element travels as its own argv entry - the prompt is never
/// shell-interpolated, so quoting and injection hazards don't apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInvocation {
    pub args: Vec<String>,
}

impl CliInvocation {
    /// The invocation contract for running one prompt:
    /// `run <model> --verbose <prompt>`.
    pub fn for_prompt(model: &str, prompt: &str) -> Self {
        Self {
            args: vec![
                "run".to_string(),
                model.to_string(),
                "--verbose".to_string(),
                prompt.to_string(),
            ],
        }
    }
}

/// Failures of one subprocess invocation.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The process could not be started at all (binary missing, permissions).
    #[error("Failed to start inference process: {0}")]
    Spawn(String),

    /// The process exited unsuccessfully. `code` is `None` when the process
    /// died to a signal. Captured stderr is kept for diagnostics.
    #[error("Inference process exited unsuccessfully{}", .code.map(|c| format!(" with code {c}")).unwrap_or_default())]
    Exit { code: Option<i32>, stderr: String },

    /// The process outlived the wall-clock bound and termination was
    /// requested. Distinct from [`RunnerError::Exit`] so callers can suggest
    /// a shorter prompt or smaller model.
    #[error("Inference process timed out after {limit_secs}s")]
    Timeout { limit_secs: u64 },

    /// All execution slots were busy and the admission policy rejects
    /// rather than queues.
    #[error("Concurrent execution limit ({0}) reached")]
    CapacityExhausted(usize),
}

/// Port for executing one inference CLI invocation to completion.
///
/// One OS process per call; implementations must not share output buffers
/// between concurrent calls.
#[async_trait]
pub trait PromptRunnerPort: Send + Sync {
    /// Run the invocation, draining both output streams until the process
    /// exits or the execution timeout fires.
    async fn run(&self, invocation: CliInvocation) -> Result<RawOutput, RunnerError>;
}
