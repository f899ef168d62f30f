//! Prompt execution request and reply types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Performance counters extracted from CLI output.
///
/// Keys come from the fixed label vocabulary in [`crate::metrics`], normalized
/// to lowercase snake form (`total_duration`, `eval_rate`, ...). Values stay
/// as raw trimmed text since units and formats vary by model. Iteration order
/// is first-seen order in the raw output.
pub type MetricsMap = IndexMap<String, String>;

/// One prompt to run against a local model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Model identifier as the inference CLI understands it (e.g. "llama3:8b").
    pub model: String,
    /// Prompt text, passed to the CLI as a single argument.
    pub prompt: String,
}

impl PromptRequest {
    /// Create a new prompt request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }
}

/// Captured output streams of one finished subprocess invocation.
///
/// Owned by a single runner invocation and discarded once folded into a
/// [`PromptReply`]. Never shared across requests.
#[derive(Debug, Clone, Default)]
pub struct RawOutput {
    /// Accumulated stdout text.
    pub stdout: String,
    /// Accumulated stderr text.
    pub stderr: String,
}

impl RawOutput {
    /// Full captured text, stdout first then stderr.
    ///
    /// Metric extraction and display cleaning both operate on this
    /// concatenation so a metric reported on either stream is seen.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Result of one successful prompt execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptReply {
    /// Model output with metric lines and terminal escapes removed.
    /// May be empty when the model produced nothing but metrics; the
    /// presentation layer decides how to render that.
    pub response: String,
    /// Counters extracted from the unfiltered output.
    pub metrics: MetricsMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_is_stdout_then_stderr() {
        let raw = RawOutput {
            stdout: "hello\n".to_string(),
            stderr: "total duration: 1s\n".to_string(),
        };
        assert_eq!(raw.combined(), "hello\ntotal duration: 1s\n");
    }

    #[test]
    fn combined_of_empty_output_is_empty() {
        assert_eq!(RawOutput::default().combined(), "");
    }
}
