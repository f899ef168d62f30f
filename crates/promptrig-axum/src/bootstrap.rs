//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the web adapter: the ollama runner, the conversation store, and the system
//! probe are all instantiated here.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use promptrig_core::ports::{ConversationStorePort, PromptRunnerPort, SystemProbePort};
use promptrig_core::service::PromptService;
use promptrig_runtime::{
    AdmissionPolicy, DEFAULT_MAX_CONCURRENT, DEFAULT_RUN_TIMEOUT, DefaultSystemProbe,
    FileConversationStore, OllamaRunner,
};
use tracing::info;

/// Default port the browser UI expects the bridge on.
pub const DEFAULT_PORT: u16 = 3022;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to (or name of) the ollama binary.
    pub ollama_path: PathBuf,
    /// Wall-clock bound on one inference run.
    pub run_timeout: Duration,
    /// Maximum concurrent inference subprocesses (0 = unbounded).
    pub max_concurrent: usize,
    /// Reject new runs instead of queueing while all slots are busy.
    pub reject_when_busy: bool,
    /// Directory conversation records are written to.
    pub conversations_dir: PathBuf,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths and bounds.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            ollama_path: PathBuf::from("ollama"),
            run_timeout: DEFAULT_RUN_TIMEOUT,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            reject_when_busy: false,
            conversations_dir: PathBuf::from("conversations"),
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Prompt execution service over the runner port.
    pub prompts: PromptService,
    /// Conversation persistence.
    pub store: Arc<dyn ConversationStorePort>,
    /// Host hardware reporting.
    pub probe: Arc<dyn SystemProbePort>,
}

/// Wire the concrete port implementations into an [`AxumContext`].
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    let policy = if config.reject_when_busy {
        AdmissionPolicy::Reject
    } else {
        AdmissionPolicy::Wait
    };
    let runner: Arc<dyn PromptRunnerPort> = Arc::new(OllamaRunner::new(
        &config.ollama_path,
        config.run_timeout,
        config.max_concurrent,
        policy,
    ));

    AxumContext {
        prompts: PromptService::new(runner),
        store: Arc::new(FileConversationStore::new(&config.conversations_dir)),
        probe: Arc::new(DefaultSystemProbe::new()),
    }
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config);

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!(
        ollama = %config.ollama_path.display(),
        max_concurrent = config.max_concurrent,
        "promptrig server listening on http://{addr}"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
