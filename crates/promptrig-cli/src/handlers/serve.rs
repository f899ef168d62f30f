//! Serve command handler.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use promptrig_axum::{ServerConfig, start_server};

/// Arguments for the serve command.
pub struct ServeArgs {
    pub port: u16,
    pub ollama_path: PathBuf,
    pub timeout_secs: u64,
    pub max_concurrent: usize,
    pub reject_when_busy: bool,
    pub conversations_dir: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub allow_origins: Vec<String>,
}

/// Start the web server with the given arguments.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig {
        port: args.port,
        ollama_path: args.ollama_path,
        run_timeout: Duration::from_secs(args.timeout_secs),
        max_concurrent: args.max_concurrent,
        reject_when_busy: args.reject_when_busy,
        conversations_dir: args.conversations_dir,
        static_dir: args.static_dir,
        ..ServerConfig::with_defaults()
    };
    if !args.allow_origins.is_empty() {
        config = config.with_allowed_origins(args.allow_origins);
    }

    start_server(config).await
}
