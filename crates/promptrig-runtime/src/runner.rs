//! `PromptRunnerPort` implementation driving the inference CLI.
//!
//! Each call spawns one subprocess with stdin closed and both output streams
//! piped, drains the streams concurrently so a full pipe buffer can never
//! deadlock the child, and enforces a wall-clock timeout with graceful
//! termination.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use promptrig_core::domain::RawOutput;
use promptrig_core::ports::{CliInvocation, PromptRunnerPort, RunnerError};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{debug, warn};

use crate::shutdown::shutdown_child;

/// Wall-clock bound on one inference run.
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of concurrent inference subprocesses.
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// What to do with a request that arrives while all execution slots are busy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdmissionPolicy {
    /// Queue on the semaphore until a slot frees up.
    #[default]
    Wait,
    /// Fail fast with [`RunnerError::CapacityExhausted`].
    Reject,
}

/// Runner that executes prompts through a local `ollama` binary.
///
/// Pure OS/process concerns only: the argument list arrives fully built, and
/// the captured output leaves uninterpreted. Concurrent invocations share
/// nothing but the admission semaphore.
pub struct OllamaRunner {
    binary: PathBuf,
    timeout: Duration,
    permits: Option<Arc<Semaphore>>,
    max_concurrent: usize,
    policy: AdmissionPolicy,
}

impl OllamaRunner {
    /// Create a new runner.
    ///
    /// `max_concurrent` bounds simultaneous subprocesses; 0 means unbounded.
    pub fn new(
        binary: impl Into<PathBuf>,
        timeout: Duration,
        max_concurrent: usize,
        policy: AdmissionPolicy,
    ) -> Self {
        Self {
            binary: binary.into(),
            timeout,
            permits: (max_concurrent > 0).then(|| Arc::new(Semaphore::new(max_concurrent))),
            max_concurrent,
            policy,
        }
    }

    /// Create a runner with the default timeout, bound, and queueing policy.
    pub fn with_defaults(binary: impl Into<PathBuf>) -> Self {
        Self::new(
            binary,
            DEFAULT_RUN_TIMEOUT,
            DEFAULT_MAX_CONCURRENT,
            AdmissionPolicy::Wait,
        )
    }

    async fn admit(&self) -> Result<Option<SemaphorePermit<'_>>, RunnerError> {
        let Some(permits) = &self.permits else {
            return Ok(None);
        };
        match self.policy {
            AdmissionPolicy::Wait => permits
                .acquire()
                .await
                .map(Some)
                .map_err(|_| RunnerError::Spawn("execution slots closed".to_string())),
            AdmissionPolicy::Reject => permits
                .try_acquire()
                .map(Some)
                .map_err(|_| RunnerError::CapacityExhausted(self.max_concurrent)),
        }
    }
}

#[async_trait]
impl PromptRunnerPort for OllamaRunner {
    async fn run(&self, invocation: CliInvocation) -> Result<RawOutput, RunnerError> {
        let _permit = self.admit().await?;

        let mut child = Command::new(&self.binary)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RunnerError::Spawn(format!("{}: {e}", self.binary.display())))?;

        debug!(binary = %self.binary.display(), pid = ?child.id(), "Spawned inference process");

        let stdout_task = tokio::spawn(drain(child.stdout.take()));
        let stderr_task = tokio::spawn(drain(child.stderr.take()));

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                stdout_task.abort();
                stderr_task.abort();
                return Err(RunnerError::Spawn(format!(
                    "failed waiting for inference process: {e}"
                )));
            }
            Err(_) => {
                warn!(
                    limit_secs = self.timeout.as_secs(),
                    "Inference run exceeded timeout, terminating"
                );
                if let Err(e) = shutdown_child(&mut child).await {
                    debug!("Termination cleanup failed: {e}");
                }
                stdout_task.abort();
                stderr_task.abort();
                return Err(RunnerError::Timeout {
                    limit_secs: self.timeout.as_secs(),
                });
            }
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        if status.success() {
            Ok(RawOutput { stdout, stderr })
        } else {
            Err(RunnerError::Exit {
                code: status.code(),
                stderr,
            })
        }
    }
}

/// Drain one output stream to completion, appending chunks as they arrive.
async fn drain<R>(stream: Option<R>) -> String
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let Some(mut stream) = stream else {
        return String::new();
    };
    let mut buf = Vec::new();
    if let Err(e) = stream.read_to_end(&mut buf).await {
        debug!("Output stream closed early: {e}");
    }
    String::from_utf8_lossy(&buf).into_owned()
}
