//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers; all infrastructure wiring happens in
//! the handlers (serve wires the web adapter, run wires a one-shot runner).

use clap::Parser;

use promptrig_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        promptrig_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            ollama_path,
            timeout_secs,
            max_concurrent,
            reject_when_busy,
            conversations_dir,
            static_dir,
            allow_origins,
        } => {
            let args = handlers::serve::ServeArgs {
                port,
                ollama_path,
                timeout_secs,
                max_concurrent,
                reject_when_busy,
                conversations_dir,
                static_dir,
                allow_origins,
            };
            handlers::serve::execute(args).await?;
        }
        Commands::Run {
            model,
            prompt,
            ollama_path,
            timeout_secs,
        } => {
            handlers::run::execute(model, prompt, ollama_path, timeout_secs).await?;
        }
        Commands::SystemInfo => {
            handlers::system_info::execute()?;
        }
    }

    Ok(())
}
