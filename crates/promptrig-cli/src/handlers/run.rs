//! Run command handler - one-shot prompt execution from the terminal.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use promptrig_core::domain::PromptRequest;
use promptrig_core::service::PromptService;
use promptrig_runtime::{AdmissionPolicy, OllamaRunner};

/// Execute one prompt and print the response and metrics.
pub async fn execute(
    model: String,
    prompt: String,
    ollama_path: PathBuf,
    timeout_secs: u64,
) -> Result<()> {
    let runner = OllamaRunner::new(
        ollama_path,
        Duration::from_secs(timeout_secs),
        1,
        AdmissionPolicy::Wait,
    );
    let service = PromptService::new(Arc::new(runner));

    let reply = service.execute(PromptRequest::new(model, prompt)).await?;

    if reply.response.is_empty() {
        println!("No response");
    } else {
        println!("{}", reply.response);
    }

    if !reply.metrics.is_empty() {
        println!();
        for (key, value) in &reply.metrics {
            println!("{key:>22}  {value}");
        }
    }

    Ok(())
}
