//! domcp command line
//!
//! Loads configuration, registers the selected DigitalOcean tools and either
//! lists them or invokes one.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use domcp_core::config::{parse_log_level, split_service_list, ServerConfig};
use domcp_core::registry::{self, COMMON_GROUPS};
use domcp_core::{
    compact_json, token_provider, CancellationToken, ChainSecretStore, ConsoleLogger, EnvSecretStore, Logger,
    MemorySecretStore, RequestContext, SecretStore, SharedLogger, ToolCall, ToolServer, API_TOKEN_KEY,
};

#[derive(Parser)]
#[command(name = "domcp")]
#[command(about = "DigitalOcean API tools with per-service category filtering")]
#[command(version)]
struct Cli {
    /// Services to enable, e.g. "droplets:all,networking:dns" (default: every service, basic tools)
    #[arg(short, long)]
    services: Option<String>,

    /// DigitalOcean API token (default: DIGITALOCEAN_API_TOKEN)
    #[arg(long)]
    api_token: Option<String>,

    /// API base URL
    #[arg(long)]
    api_endpoint: Option<String>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Configuration file path (default: ~/.config/domcp/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List services and the categories each understands
    Services,
    /// Register the selected services and print their tools as JSON
    Tools {
        /// Print only tool names
        #[arg(long)]
        names: bool,
    },
    /// Register the selected services and invoke one tool
    Call {
        /// Tool name, e.g. droplet-list
        tool: String,
        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let logger: SharedLogger = Arc::new(ConsoleLogger::new().with_level(config.log_level));

    match &cli.command {
        Commands::Services => {
            print_services();
            Ok(())
        }
        Commands::Tools { names } => {
            let server = build_server(&config, cli.api_token.as_deref(), logger)?;
            if *names {
                for name in server.tool_names() {
                    println!("{}", name);
                }
            } else {
                println!("{}", compact_json(&server.list_tools())?);
            }
            Ok(())
        }
        Commands::Call { tool, args } => {
            let input: Value = serde_json::from_str(args).context("--args must be a JSON object")?;
            let server = build_server(&config, cli.api_token.as_deref(), logger.clone())?;

            let cancellation = CancellationToken::new();
            let on_interrupt = cancellation.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });

            let ctx = RequestContext::new().with_cancellation(cancellation);
            let result = server.execute_tool_call(&ToolCall::new("cli", tool.as_str(), input), ctx).await;
            if result.is_error {
                bail!("{}", result.content);
            }
            println!("{}", result.content);
            Ok(())
        }
    }
}

/// Config file and environment, then command-line flags on top
fn resolve_config(cli: &Cli) -> Result<ServerConfig> {
    let mut config = ServerConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if let Some(services) = &cli.services {
        config.services = split_service_list(services);
    }
    if let Some(endpoint) = &cli.api_endpoint {
        config.api_endpoint = endpoint.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = parse_log_level(level)?;
    }
    config.validate()?;
    Ok(config)
}

fn build_server(config: &ServerConfig, api_token: Option<&str>, logger: SharedLogger) -> Result<ToolServer> {
    let mut stores: Vec<Arc<dyn SecretStore>> = Vec::new();
    if let Some(token) = api_token.filter(|t| !t.is_empty()) {
        stores.push(Arc::new(MemorySecretStore::with_secret(API_TOKEN_KEY, token)));
    }
    stores.push(Arc::new(EnvSecretStore::new()));
    let secrets = Arc::new(ChainSecretStore::new(stores));

    if !secrets.has(API_TOKEN_KEY) {
        logger.warn("No DigitalOcean API token configured; tool calls will fail until one is set");
    }

    let provider = token_provider(config.api_endpoint.clone(), secrets)?;
    let server = ToolServer::new(logger.clone());
    let report = registry::register(&server, &provider, logger.as_ref(), &config.services)?;
    logger.debug(&format!(
        "Activated groups: {}",
        report.groups.iter().map(|g| g.name()).collect::<Vec<_>>().join(", ")
    ));
    Ok(server)
}

fn print_services() {
    for entry in registry::catalog() {
        println!("{:<12} {}", entry.service.as_str(), entry.categories.join(", "));
    }
    let common: Vec<&str> = COMMON_GROUPS.iter().map(|g| g.name()).collect();
    println!("{:<12} {} (always registered)", "common", common.join(", "));
}
