//! Metric extraction and display cleaning for inference CLI output.
//!
//! `ollama run --verbose` interleaves the model's answer with performance
//! counter lines on stdout/stderr. Extraction is tolerant by contract: a
//! missing or unrecognized metric means an absent key, never an error, since
//! the CLI's output format is not a stable interface.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::MetricsMap;

/// Counter labels reported by the inference CLI, matched case-insensitively.
///
/// Longer phrases come first so `prompt eval count` is never claimed by the
/// shorter `eval count`.
pub const METRIC_LABELS: [&str; 8] = [
    "total duration",
    "load duration",
    "prompt eval count",
    "prompt eval duration",
    "prompt eval rate",
    "eval count",
    "eval duration",
    "eval rate",
];

/// Substrings that mark a line as metric noise for display purposes.
///
/// Intentionally coarser than [`METRIC_LABELS`]: a counter line the extractor
/// cannot parse should still be dropped from the displayed response.
const FILTER_SUBSTRINGS: [&str; 3] = ["duration", "count", "rate"];

// Line-anchored: optional leading whitespace, a label phrase, an optional
// ':' or '=' separator, then the rest of the line as the value.
static METRIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let labels = METRIC_LABELS.join("|");
    Regex::new(&format!(r"(?i)^\s*({labels})\s*[:=]?\s*(.+)$")).expect("metric pattern is valid")
});

// "ESC[" through the first ASCII letter, the common CSI shape emitted by
// terminal spinners and color codes.
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[.*?[a-zA-Z]").expect("escape pattern is valid"));

/// Extract performance counters from raw CLI output.
///
/// Pure function over the full unfiltered text: keys appear in first-seen
/// order, a repeated label overwrites in place (last occurrence wins), and
/// lines that match no label are ignored.
pub fn extract_metrics(output: &str) -> MetricsMap {
    let mut metrics = MetricsMap::new();
    for line in output.lines() {
        if let Some(caps) = METRIC_LINE.captures(line) {
            metrics.insert(normalize_label(&caps[1]), caps[2].trim().to_string());
        }
    }
    metrics
}

/// Reduce raw CLI output to the display-worthy response text.
///
/// Drops every line containing a [`FILTER_SUBSTRINGS`] match, strips terminal
/// escape sequences from what remains, and trims the result. Runs on the same
/// combined text as [`extract_metrics`], never on its output, so filtering
/// here can never hide a counter from the metrics map.
pub fn clean_response(output: &str) -> String {
    let kept: Vec<&str> = output
        .lines()
        .filter(|line| !is_metric_noise(line))
        .collect();
    ANSI_ESCAPE
        .replace_all(&kept.join("\n"), "")
        .trim()
        .to_string()
}

fn is_metric_noise(line: &str) -> bool {
    let lower = line.to_lowercase();
    FILTER_SUBSTRINGS.iter().any(|s| lower.contains(s))
}

fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERBOSE_OUTPUT: &str = "\
Hello world
total duration: 1.2s
eval rate: 42 tokens/s
";

    #[test]
    fn extracts_known_labels() {
        let metrics = extract_metrics(VERBOSE_OUTPUT);
        assert_eq!(metrics["total_duration"], "1.2s");
        assert_eq!(metrics["eval_rate"], "42 tokens/s");
        assert_eq!(metrics.len(), 2);
    }

    #[test]
    fn cleaned_response_keeps_only_prose() {
        assert_eq!(clean_response(VERBOSE_OUTPUT), "Hello world");
    }

    #[test]
    fn labels_match_case_insensitively_with_either_separator() {
        let metrics = extract_metrics("  Total Duration = 3.4s\nEVAL COUNT: 120 token(s)\n");
        assert_eq!(metrics["total_duration"], "3.4s");
        assert_eq!(metrics["eval_count"], "120 token(s)");
    }

    #[test]
    fn prompt_eval_labels_are_not_claimed_by_shorter_phrases() {
        let metrics = extract_metrics("prompt eval rate: 95.2 tokens/s\neval rate: 41.0 tokens/s\n");
        assert_eq!(metrics["prompt_eval_rate"], "95.2 tokens/s");
        assert_eq!(metrics["eval_rate"], "41.0 tokens/s");
    }

    #[test]
    fn duplicate_labels_keep_first_position_last_value() {
        let metrics = extract_metrics("eval rate: 1 t/s\ntotal duration: 2s\neval rate: 9 t/s\n");
        assert_eq!(metrics["eval_rate"], "9 t/s");
        let keys: Vec<&String> = metrics.keys().collect();
        assert_eq!(keys, ["eval_rate", "total_duration"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract_metrics(VERBOSE_OUTPUT);
        let second = extract_metrics(VERBOSE_OUTPUT);
        assert_eq!(first, second);
    }

    #[test]
    fn keys_stay_within_the_vocabulary() {
        let noisy = "load duration: 8ms\ndownload speed: fast\nwall duration total: 4s\n";
        let metrics = extract_metrics(noisy);
        for key in metrics.keys() {
            let phrase = key.replace('_', " ");
            assert!(METRIC_LABELS.contains(&phrase.as_str()), "unexpected key {key}");
        }
        assert_eq!(metrics.len(), 1);
    }

    #[test]
    fn label_without_value_is_ignored() {
        assert!(extract_metrics("total duration:\n").is_empty());
    }

    #[test]
    fn coarse_filter_is_broader_than_extraction() {
        // "download rate" is not in the vocabulary but still display noise
        let text = "download rate: 3 MB/s\nanswer\n";
        assert!(extract_metrics(text).is_empty());
        assert_eq!(clean_response(text), "answer");
    }

    #[test]
    fn terminal_escapes_are_stripped() {
        let text = "\u{1b}[2K\u{1b}[1Gspinning\u{1b}[0m done\n";
        assert_eq!(clean_response(text), "spinning done");
    }

    #[test]
    fn empty_input_yields_empty_results() {
        assert!(extract_metrics("").is_empty());
        assert_eq!(clean_response(""), "");
    }
}
