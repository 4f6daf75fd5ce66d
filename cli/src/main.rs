//! CLI entrypoint for tooltrack
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tooltrack_application::{AskSageUseCase, SageClient};
use tooltrack_domain::Severity;
use tooltrack_infrastructure::{
    ConfigLoader, EnvCredentialProvider, FileConfig, GeminiLlmGateway, HttpSageClient,
};
use tooltrack_presentation::{Cli, Command, OutputConfig, ReplConfig, TerminalRepl};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting tooltrack");

    let config = load_config(&cli)?;

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiLlmGateway::from_config(&config.sage));
    let credentials = Arc::new(EnvCredentialProvider::new(config.sage.api_key_env.clone()));
    let use_case = AskSageUseCase::new(gateway, credentials);

    match cli.command() {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let addr: SocketAddr = bind
                .parse()
                .with_context(|| format!("Invalid listen address '{}'", bind))?;
            tooltrack_presentation::serve(addr, use_case).await?;
        }
        Command::Terminal { endpoint } => {
            let sage: Arc<dyn SageClient> = match endpoint {
                Some(url) => {
                    info!("Asking Sage through {}", url);
                    Arc::new(HttpSageClient::new(url))
                }
                None => Arc::new(use_case),
            };

            let repl_config = ReplConfig {
                history_file: config.repl.history_file.clone(),
                show_tools: config.repl.show_tools,
            };
            let output_config = OutputConfig {
                color: config.output.color && !cli.no_color,
            };

            let mut repl = TerminalRepl::new(sage)
                .with_repl_config(repl_config)
                .with_output_config(output_config);
            repl.run().await?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level, to stderr or `log_file`
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Load and validate configuration files
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok(config)
}
