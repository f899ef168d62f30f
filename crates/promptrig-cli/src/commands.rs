//! Main commands enum and subcommand arguments.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the promptrig bridge.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server bridging the browser UI to the ollama CLI
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, default_value_t = 3022, env = "PROMPTRIG_PORT")]
        port: u16,

        /// Path to (or name of) the ollama binary
        #[arg(long, default_value = "ollama", env = "PROMPTRIG_OLLAMA_PATH")]
        ollama_path: PathBuf,

        /// Wall-clock bound on one inference run, in seconds
        #[arg(long, default_value_t = 30, env = "PROMPTRIG_TIMEOUT_SECS")]
        timeout_secs: u64,

        /// Maximum concurrent inference subprocesses (0 = unbounded)
        #[arg(long, default_value_t = 4, env = "PROMPTRIG_MAX_CONCURRENT")]
        max_concurrent: usize,

        /// Reject new prompt runs instead of queueing while all slots are busy
        #[arg(long)]
        reject_when_busy: bool,

        /// Directory conversation records are written to
        #[arg(long, default_value = "conversations", env = "PROMPTRIG_CONVERSATIONS_DIR")]
        conversations_dir: PathBuf,

        /// Serve a browser UI from this directory (SPA fallback to index.html)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Restrict CORS to these origins (default: allow all)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Run a single prompt from the terminal
    Run {
        /// Model identifier as ollama understands it (e.g. "llama3:8b")
        model: String,

        /// Prompt text
        prompt: String,

        /// Path to (or name of) the ollama binary
        #[arg(long, default_value = "ollama", env = "PROMPTRIG_OLLAMA_PATH")]
        ollama_path: PathBuf,

        /// Wall-clock bound on the run, in seconds
        #[arg(long, default_value_t = 30, env = "PROMPTRIG_TIMEOUT_SECS")]
        timeout_secs: u64,
    },

    /// Print host hardware facts as JSON
    SystemInfo,
}
